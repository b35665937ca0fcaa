//! Application state

use anyhow::{Context, Result};
use ello_core::catalog::wire::decode_books;
use ello_core::Book;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The catalog served by the `books` query, read once at startup
    pub catalog: Arc<Vec<Book>>,

    /// Directory served under `/static`
    pub asset_dir: PathBuf,
}

impl AppState {
    pub fn new(books: Vec<Book>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Arc::new(books),
            asset_dir: asset_dir.into(),
        }
    }

    /// Create state from `ELLO_CATALOG_PATH` and `ELLO_ASSET_DIR`
    pub async fn from_env() -> Result<Self> {
        let catalog_path =
            std::env::var("ELLO_CATALOG_PATH").unwrap_or_else(|_| "./catalog.json".to_string());
        let asset_dir = std::env::var("ELLO_ASSET_DIR").unwrap_or_else(|_| "./assets".to_string());

        let books = load_catalog(Path::new(&catalog_path)).await?;
        tracing::info!("Serving {} books from {}", books.len(), catalog_path);

        Ok(Self::new(books, asset_dir))
    }
}

/// Read a catalog file; a missing file is an empty catalog
pub async fn load_catalog(path: &Path) -> Result<Vec<Book>> {
    match tokio::fs::read(path).await {
        Ok(data) => decode_books(&data)
            .with_context(|| format!("Failed to decode catalog {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Catalog {} not found, serving no books", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read catalog {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_catalog_is_empty() {
        let books = load_catalog(Path::new("/nonexistent/catalog.json"))
            .await
            .unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_catalog_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        tokio::fs::write(&path, "{ nope").await.unwrap();
        assert!(load_catalog(&path).await.is_err());
    }
}
