// src/storage.rs
//! On-disk storage for rendered decks.
//!
//! Every deck gets its own `<root>/<uuid>/` directory; the user-supplied title
//! only contributes the sanitized file name inside it. Download keys are the
//! `<uuid>/<file name>` pair and are resolved with a containment check.

use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::error::AppError;

const MAX_STEM_LEN: usize = 64;
const FILE_SUFFIX: &str = "_presentation.pptx";

#[derive(Debug, Clone)]
pub struct StoredDeck {
    /// Relative key used in download links, `<uuid>/<file_name>`.
    pub key: String,
    pub path: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct DeckStorage {
    root: PathBuf,
}

/// Turns a title into a safe file stem: ASCII alphanumerics, `-` and `_`
/// are kept, whitespace becomes `_`, everything else is dropped.
pub fn sanitize_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .take(MAX_STEM_LEN)
        .collect();

    if stem.chars().all(|c| c == '_') {
        "presentation".to_string()
    } else {
        stem
    }
}

/// Creates `dir` and writes `file_name` inside it. On a failed write the
/// directory is removed again.
async fn write_in_new_dir(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    if let Err(e) = tokio::fs::write(&path, bytes).await {
        if let Err(cleanup) = tokio::fs::remove_dir_all(dir).await {
            tracing::warn!(dir = %dir.display(), error = %cleanup, "failed to remove deck directory");
        }
        return Err(e.into());
    }
    Ok(path)
}

impl DeckStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage root if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Writes `bytes` under a fresh UUID directory.
    pub async fn store(&self, title: &str, bytes: &[u8]) -> Result<StoredDeck, AppError> {
        let id = Uuid::new_v4().to_string();
        let file_name = format!("{}{}", sanitize_title(title), FILE_SUFFIX);

        let dir = self.root.join(&id);
        let path = write_in_new_dir(&dir, &file_name, bytes).await?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "presentation stored");

        Ok(StoredDeck {
            key: format!("{}/{}", id, file_name),
            path,
            file_name,
        })
    }

    /// Maps a download key back to a stored file.
    ///
    /// Only keys made of plain path segments are accepted, and the result must
    /// still lie inside the storage root once symlinks are resolved.
    pub async fn resolve(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || key.contains('\\') {
            return Err(AppError::NotFound);
        }

        let relative = Path::new(key);
        let mut joined = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => joined.push(segment),
                _ => {
                    tracing::warn!(key = %key, "rejected download key");
                    return Err(AppError::NotFound);
                }
            }
        }
        // components() silently drops `.` and repeated separators
        if key.split('/').any(|segment| segment.is_empty() || segment == ".") {
            return Err(AppError::NotFound);
        }

        let root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(|_| AppError::NotFound)?;
        let resolved = tokio::fs::canonicalize(&joined)
            .await
            .map_err(|_| AppError::NotFound)?;

        if !resolved.starts_with(&root) {
            tracing::warn!(key = %key, "download key escapes storage root");
            return Err(AppError::NotFound);
        }

        let metadata = tokio::fs::metadata(&resolved)
            .await
            .map_err(|_| AppError::NotFound)?;
        if !metadata.is_file() {
            return Err(AppError::NotFound);
        }

        Ok(resolved)
    }
}
