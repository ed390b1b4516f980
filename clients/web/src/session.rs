//! Client-held session
//!
//! The bearer token lives in an explicit `Session` object that is passed
//! through the request layer; LocalStorage only persists it across page
//! loads and tabs.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "medialog.session";

/// A logged-in session held by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// Load the persisted session, if any
pub fn load() -> Option<Session> {
    LocalStorage::get(SESSION_KEY).ok()
}

/// Persist the session across page loads
pub fn store(session: &Session) {
    let _ = LocalStorage::set(SESSION_KEY, session);
}

/// Drop the persisted session, e.g. on logout or a 401 response
pub fn clear() {
    LocalStorage::delete(SESSION_KEY);
}
