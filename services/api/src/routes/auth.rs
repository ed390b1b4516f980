//! Credential routes: registration and login

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{error, info};

use crate::{
    error::ApiError,
    models::{LoginRequest, LoginResponse, NewUser, RegisterRequest, UserResponse},
    state::AppState,
    validation,
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_name(&payload.name).map_err(ApiError::Validation)?;
    validation::validate_email(&payload.email).map_err(ApiError::Validation)?;
    validation::validate_password(&payload.password).map_err(ApiError::Validation)?;

    let existing = state
        .user_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::Internal
        })?;

    if existing.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let new_user = NewUser {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    // Two registrations can race past the lookup; the unique index on
    // email settles it at insert time.
    let user = state.user_repository.create(&new_user).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict("User already exists".to_string())
        } else {
            error!("Failed to create user: {}", e);
            ApiError::Internal
        }
    })?;

    info!("Registered user {}", user.email);

    Ok((StatusCode::OK, Json(UserResponse::from(user))))
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}

/// Log a user in and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::Internal
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    let password_matches = state
        .user_repository
        .verify_password(&user, &payload.password)
        .map_err(|e| {
            error!("Failed to verify password: {}", e);
            ApiError::Internal
        })?;

    if !password_matches {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.issue_token(&user).map_err(|e| {
        error!("Failed to issue token: {}", e);
        ApiError::Internal
    })?;

    info!("Login successful for {}", user.email);

    Ok(Json(LoginResponse { token }))
}
