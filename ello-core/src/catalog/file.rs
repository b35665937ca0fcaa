//! Catalog read from a local JSON file

use super::wire::decode_books;
use super::{CatalogSource, FetchResult};
use crate::types::Book;
use async_trait::async_trait;
use std::path::PathBuf;

/// Local file catalog source.
///
/// Accepts a bare array of books or the same envelope the GraphQL endpoint returns.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> FetchResult<Vec<Book>> {
        let data = tokio::fs::read(&self.path).await?;
        decode_books(&data)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[tokio::test]
    async fn test_reads_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        tokio::fs::write(
            &path,
            r#"[{"title":"Frog and Toad","author":"Lobel","coverPhotoURL":"frog.jpg","readingLevel":"1"}]"#,
        )
        .await
        .unwrap();

        let books = FileCatalog::new(&path).fetch().await.unwrap();
        assert_eq!(books[0].author, "Lobel");
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let source = FileCatalog::new("/nonexistent/catalog.json");
        assert!(matches!(source.fetch().await, Err(FetchError::Io(_))));
    }
}
