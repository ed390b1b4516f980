//! Input validation for the request boundary
//!
//! Every request body is validated here before it reaches a repository.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{MediaCategory, MediaFields};

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    if name.len() > 100 {
        return Err("Name must be at most 100 characters long".to_string());
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate the raw media form fields and produce the typed fields
pub fn validate_media_fields(
    title: Option<String>,
    category: Option<String>,
    director: Option<String>,
    budget: Option<String>,
    location: Option<String>,
    duration: Option<String>,
    year: Option<String>,
) -> Result<MediaFields, String> {
    let title = title.unwrap_or_default();
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }

    if title.len() > 200 {
        return Err("Title must be at most 200 characters long".to_string());
    }

    let category: MediaCategory = category
        .ok_or_else(|| "Category is required".to_string())?
        .parse()?;

    Ok(MediaFields {
        title,
        category,
        director: none_if_blank(director),
        budget: none_if_blank(budget),
        location: none_if_blank(location),
        duration: none_if_blank(duration),
        year: none_if_blank(year),
    })
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@example.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("pw1").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_media_fields() {
        let fields = validate_media_fields(
            Some("Dune".to_string()),
            Some("Movie".to_string()),
            Some("Denis Villeneuve".to_string()),
            None,
            Some("  ".to_string()),
            None,
            Some("2021".to_string()),
        )
        .expect("Valid fields rejected");

        assert_eq!(fields.title, "Dune");
        assert_eq!(fields.category, MediaCategory::Movie);
        assert_eq!(fields.director.as_deref(), Some("Denis Villeneuve"));
        // blank optional fields collapse to None
        assert_eq!(fields.location, None);
        assert_eq!(fields.year.as_deref(), Some("2021"));
    }

    #[test]
    fn test_media_fields_require_title_and_category() {
        assert!(
            validate_media_fields(None, Some("Movie".into()), None, None, None, None, None)
                .is_err()
        );
        assert!(
            validate_media_fields(Some("Dune".into()), None, None, None, None, None, None)
                .is_err()
        );
        assert!(validate_media_fields(
            Some("Dune".into()),
            Some("Radio".into()),
            None,
            None,
            None,
            None,
            None
        )
        .is_err());
    }
}
