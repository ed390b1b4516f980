//! Storage for uploaded poster images
//!
//! Uploaded files land in a server-local directory under a
//! timestamp-prefixed name and are served back under the public `/uploads`
//! route. Files are never deleted when an entry is updated or removed.

use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Filesystem store for uploaded images
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create the store, ensuring the upload directory exists
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory served under the public uploads route
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write uploaded bytes to disk and return the public relative path
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String> {
        let file_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(original_name)
        );

        tokio::fs::write(self.dir.join(&file_name), data).await?;

        Ok(format!("/uploads/{}", file_name))
    }
}

/// Strip path components and collapse whitespace so the uploaded name is
/// safe to use on the local filesystem
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                '_'
            } else if matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0') {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("poster.png"), "poster.png");
        assert_eq!(sanitize_file_name("my poster image.jpg"), "my_poster_image.jpg");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\covers\\dune.png"), "dune.png");
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name(".."), "upload");
    }

    #[tokio::test]
    async fn test_save_writes_timestamped_file() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let store = UploadStore::new(tmp.path()).expect("Failed to create store");

        let path = store
            .save("dune poster.png", b"fake image bytes")
            .await
            .expect("Failed to save upload");

        assert!(path.starts_with("/uploads/"));
        assert!(path.ends_with("-dune_poster.png"));

        let file_name = path.strip_prefix("/uploads/").unwrap();
        let on_disk = tokio::fs::read(tmp.path().join(file_name))
            .await
            .expect("Uploaded file missing");
        assert_eq!(on_disk, b"fake image bytes");
    }
}
