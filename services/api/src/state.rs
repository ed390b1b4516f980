//! Application state shared across handlers

use crate::{
    jwt::JwtService,
    repositories::{MediaRepository, UserRepository},
    uploads::UploadStore,
};

/// Application state shared across handlers
///
/// Everything here is constructed once at startup and injected explicitly;
/// handlers never reach for globals or re-read the environment.
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub media_repository: MediaRepository,
    pub jwt_service: JwtService,
    pub uploads: UploadStore,
}
