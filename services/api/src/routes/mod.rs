//! API service routes

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{middleware::auth_middleware, state::AppState};

mod auth;
mod media;

/// Poster uploads are small images; 10 MiB is plenty
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/media", post(media::create_entry).get(media::list_entries))
        .route(
            "/api/media/:id",
            get(media::get_entry)
                .put(media::update_entry)
                .delete(media::delete_entry),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .merge(protected_routes)
        .nest_service("/uploads", ServeDir::new(state.uploads.dir()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "media-catalog-api"
    }))
}
