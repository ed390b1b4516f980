//! Repositories for database operations

mod media;
mod user;

pub use media::MediaRepository;
pub use user::UserRepository;
