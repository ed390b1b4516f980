//! API models for entities and request/response payloads

mod media;
mod user;

pub use media::{MediaCategory, MediaEntry, MediaFields};
pub use user::{LoginRequest, LoginResponse, NewUser, RegisterRequest, User, UserResponse};
