//! Owner-scoped media entry routes
//!
//! Create and update accept multipart bodies so a poster image can ride
//! along with the text fields. Ownership failures are reported as 404, the
//! same as a missing record.

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::MediaFields,
    state::AppState,
    validation,
};

/// Raw multipart form content before validation
#[derive(Default)]
struct EntryForm {
    title: Option<String>,
    category: Option<String>,
    director: Option<String>,
    budget: Option<String>,
    location: Option<String>,
    duration: Option<String>,
    year: Option<String>,
    image: Option<(String, Bytes)>,
}

impl EntryForm {
    fn into_validated(self) -> Result<(MediaFields, Option<(String, Bytes)>), ApiError> {
        let fields = validation::validate_media_fields(
            self.title,
            self.category,
            self.director,
            self.budget,
            self.location,
            self.duration,
            self.year,
        )
        .map_err(ApiError::Validation)?;

        Ok((fields, self.image))
    }
}

async fn read_entry_form(mut multipart: Multipart) -> Result<EntryForm, ApiError> {
    let mut form = EntryForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Invalid multipart body".to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|_| ApiError::Validation("Invalid image upload".to_string()))?;

            // An empty part means the file input was left blank
            if !data.is_empty() {
                form.image = Some((file_name, data));
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|_| ApiError::Validation(format!("Invalid value for field '{}'", name)))?;

        match name.as_str() {
            "title" => form.title = Some(value),
            "category" => form.category = Some(value),
            "director" => form.director = Some(value),
            "budget" => form.budget = Some(value),
            "location" => form.location = Some(value),
            "duration" => form.duration = Some(value),
            "year" => form.year = Some(value),
            _ => {}
        }
    }

    Ok(form)
}

fn parse_entry_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("Invalid ID format".to_string()))
}

async fn store_image(
    state: &AppState,
    image: Option<(String, Bytes)>,
) -> Result<Option<String>, ApiError> {
    match image {
        Some((file_name, data)) => {
            let path = state.uploads.save(&file_name, &data).await.map_err(|e| {
                error!("Failed to store uploaded image: {}", e);
                ApiError::Internal
            })?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Create a new media entry owned by the authenticated user
pub async fn create_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let (fields, image) = read_entry_form(multipart).await?.into_validated()?;
    let image_path = store_image(&state, image).await?;

    let entry = state
        .media_repository
        .create(user.id, &fields, image_path)
        .await
        .map_err(|e| {
            error!("Failed to create media entry: {}", e);
            ApiError::Internal
        })?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// List all entries owned by the authenticated user, newest first
pub async fn list_entries(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .media_repository
        .list_for_owner(user.id)
        .await
        .map_err(|e| {
            error!("Failed to list media entries: {}", e);
            ApiError::Internal
        })?;

    Ok(Json(entries))
}

/// Fetch a single entry by id
pub async fn get_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_entry_id(&id)?;

    let entry = state
        .media_repository
        .find_for_owner(user.id, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch media entry: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::NotFound("Media not found".to_string()))?;

    Ok(Json(entry))
}

/// Update an entry, keeping the previous poster when none is uploaded
pub async fn update_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_entry_id(&id)?;
    let (fields, image) = read_entry_form(multipart).await?.into_validated()?;

    let existing = state
        .media_repository
        .find_for_owner(user.id, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch media entry: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::NotFound("Media not found".to_string()))?;

    let image_path = match store_image(&state, image).await? {
        Some(path) => Some(path),
        None => existing.image,
    };

    let updated = state
        .media_repository
        .update_for_owner(user.id, id, &fields, image_path)
        .await
        .map_err(|e| {
            error!("Failed to update media entry: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::NotFound("Media not found".to_string()))?;

    Ok(Json(updated))
}

/// Delete an entry owned by the authenticated user
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_entry_id(&id)?;

    let deleted = state
        .media_repository
        .delete_for_owner(user.id, id)
        .await
        .map_err(|e| {
            error!("Failed to delete media entry: {}", e);
            ApiError::Internal
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Media not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Media deleted successfully"
    })))
}
