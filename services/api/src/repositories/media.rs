//! Media repository for database operations
//!
//! Every query here is owner-scoped: the requesting user's id is part of the
//! WHERE clause, so an entry owned by someone else is indistinguishable from
//! one that does not exist.

use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{MediaEntry, MediaFields};

/// Media repository
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    /// Create a new media repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new entry owned by `owner`
    pub async fn create(
        &self,
        owner: Uuid,
        fields: &MediaFields,
        image: Option<String>,
    ) -> Result<MediaEntry> {
        let row = sqlx::query(
            r#"
            INSERT INTO media_entries
                (title, category, director, budget, location, duration, year, image, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, category, director, budget, location, duration, year,
                      image, user_id, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(fields.category.as_str())
        .bind(&fields.director)
        .bind(&fields.budget)
        .bind(&fields.location)
        .bind(&fields.duration)
        .bind(&fields.year)
        .bind(&image)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_entry(&row))
    }

    /// All entries owned by `owner`, newest first
    pub async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<MediaEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, category, director, budget, location, duration, year,
                   image, user_id, created_at, updated_at
            FROM media_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_entry).collect())
    }

    /// Find a single entry by id, scoped to `owner`
    pub async fn find_for_owner(&self, owner: Uuid, id: Uuid) -> Result<Option<MediaEntry>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, category, director, budget, location, duration, year,
                   image, user_id, created_at, updated_at
            FROM media_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_entry))
    }

    /// Replace the fields of an entry owned by `owner`
    ///
    /// `image` is the resolved image path: either the freshly uploaded file
    /// or the previously stored one, decided by the caller. Returns `None`
    /// when the entry is absent or owned by someone else.
    pub async fn update_for_owner(
        &self,
        owner: Uuid,
        id: Uuid,
        fields: &MediaFields,
        image: Option<String>,
    ) -> Result<Option<MediaEntry>> {
        let row = sqlx::query(
            r#"
            UPDATE media_entries
            SET title = $1, category = $2, director = $3, budget = $4, location = $5,
                duration = $6, year = $7, image = $8, updated_at = NOW()
            WHERE id = $9 AND user_id = $10
            RETURNING id, title, category, director, budget, location, duration, year,
                      image, user_id, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(fields.category.as_str())
        .bind(&fields.director)
        .bind(&fields.budget)
        .bind(&fields.location)
        .bind(&fields.duration)
        .bind(&fields.year)
        .bind(&image)
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_entry))
    }

    /// Delete an entry owned by `owner`, returning whether a row was removed
    ///
    /// The uploaded image file, if any, stays on disk.
    pub async fn delete_for_owner(&self, owner: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM media_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_entry(row: &sqlx::postgres::PgRow) -> MediaEntry {
    MediaEntry {
        id: row.get("id"),
        title: row.get("title"),
        category: row.get("category"),
        director: row.get("director"),
        budget: row.get("budget"),
        location: row.get("location"),
        duration: row.get("duration"),
        year: row.get("year"),
        image: row.get("image"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
