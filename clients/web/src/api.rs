//! Typed HTTP client for the media catalog API
//!
//! `UnauthorizedApi` covers registration and login; a successful login
//! yields a `Session` from which an `AuthorizedApi` is built that attaches
//! the bearer header to every request.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::FormData;

use crate::models::{Credentials, MediaEntry, Message, RegisterPayload, TokenResponse, UserSummary};
use crate::session::Session;

/// Base path of the REST API
pub const DEFAULT_API_URL: &str = "/api";

#[derive(Clone, Copy)]
pub struct UnauthorizedApi {
    url: &'static str,
}

impl UnauthorizedApi {
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<UserSummary> {
        let url = format!("{}/auth/register", self.url);
        let response = Request::post(&url).json(payload)?.send().await?;
        parse_response(response).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}/auth/login", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        let token: TokenResponse = parse_response(response).await?;
        Ok(Session {
            token: token.token,
            email: credentials.email.clone(),
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthorizedApi {
    url: &'static str,
    session: Session,
}

impl AuthorizedApi {
    pub fn new(url: &'static str, session: Session) -> Self {
        Self { url, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.session.token)
    }

    pub async fn list_entries(&self) -> Result<Vec<MediaEntry>> {
        let url = format!("{}/media", self.url);
        let response = Request::get(&url)
            .header("Authorization", &self.auth_header_value())
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn entry(&self, id: &str) -> Result<MediaEntry> {
        let url = format!("{}/media/{}", self.url, id);
        let response = Request::get(&url)
            .header("Authorization", &self.auth_header_value())
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn create_entry(&self, form: FormData) -> Result<MediaEntry> {
        let url = format!("{}/media", self.url);
        let response = Request::post(&url)
            .header("Authorization", &self.auth_header_value())
            .body(form)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn update_entry(&self, id: &str, form: FormData) -> Result<MediaEntry> {
        let url = format!("{}/media/{}", self.url, id);
        let response = Request::put(&url)
            .header("Authorization", &self.auth_header_value())
            .body(form)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn delete_entry(&self, id: &str) -> Result<Message> {
        let url = format!("{}/media/{}", self.url, id);
        let response = Request::delete(&url)
            .header("Authorization", &self.auth_header_value())
            .send()
            .await?;
        parse_response(response).await
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("Session expired")]
    Unauthorized,
    #[error("{0}")]
    Api(String),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

async fn parse_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }

    if response.status() == 401 {
        return Err(Error::Unauthorized);
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => Err(Error::Api(body.error)),
        Err(_) => Err(Error::Api(format!(
            "Request failed with status {}",
            response.status()
        ))),
    }
}
