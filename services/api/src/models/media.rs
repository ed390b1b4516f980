//! Media entry model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Media entry entity
///
/// Every entry belongs to exactly one user; queries are always scoped by
/// `user_id` so no entry is ever visible to a non-owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaEntry {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    /// Relative path under the public uploads route, e.g. `/uploads/123-poster.png`
    pub image: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Constrained media category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Movie,
    TvShow,
    Documentary,
}

impl MediaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Movie => "Movie",
            MediaCategory::TvShow => "TV Show",
            MediaCategory::Documentary => "Documentary",
        }
    }
}

impl FromStr for MediaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" => Ok(MediaCategory::Movie),
            "TV Show" => Ok(MediaCategory::TvShow),
            "Documentary" => Ok(MediaCategory::Documentary),
            other => Err(format!(
                "Invalid category '{}', expected Movie, TV Show, or Documentary",
                other
            )),
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated media entry fields collected from a multipart form
#[derive(Debug, Clone)]
pub struct MediaFields {
    pub title: String,
    pub category: MediaCategory,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Movie".parse::<MediaCategory>(), Ok(MediaCategory::Movie));
        assert_eq!(
            "TV Show".parse::<MediaCategory>(),
            Ok(MediaCategory::TvShow)
        );
        assert_eq!(
            "Documentary".parse::<MediaCategory>(),
            Ok(MediaCategory::Documentary)
        );
        assert!("Podcast".parse::<MediaCategory>().is_err());
        assert!("movie".parse::<MediaCategory>().is_err());
    }

    #[test]
    fn test_category_round_trip() {
        for category in [
            MediaCategory::Movie,
            MediaCategory::TvShow,
            MediaCategory::Documentary,
        ] {
            assert_eq!(category.as_str().parse::<MediaCategory>(), Ok(category));
        }
    }
}
