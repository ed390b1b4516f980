//! Client-side mirrors of the API payloads

use serde::{Deserialize, Serialize};

/// A media entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub image: Option<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registered user summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Token payload returned by login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic message payload, e.g. from delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// The category options the catalog knows about
pub const CATEGORIES: [&str; 3] = ["Movie", "TV Show", "Documentary"];
