//! Catalog sources
//!
//! A source delivers the whole ordered book collection in one call. Nothing
//! about search terms or pages is sent to it; all of that happens client-side.

mod file;
mod graphql;
pub mod wire;

pub use file::FileCatalog;
pub use graphql::GraphQlCatalog;

use crate::error::{ConfigError, FetchError};
use crate::settings::Settings;
use crate::types::Book;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Result type for catalog fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Remote fetches give up after this long
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Pick the catalog source: a local file wins over the configured endpoint
pub fn source_for(
    settings: &Settings,
    catalog_file: Option<&Path>,
) -> crate::Result<Arc<dyn CatalogSource>> {
    if let Some(path) = catalog_file {
        return Ok(Arc::new(FileCatalog::new(path)));
    }
    match &settings.endpoint {
        Some(endpoint) => Ok(Arc::new(GraphQlCatalog::with_timeout(
            endpoint.clone(),
            FETCH_TIMEOUT,
        )?)),
        None => Err(ConfigError::Invalid(
            "no catalog source configured; pass --endpoint or --catalog".to_string(),
        )
        .into()),
    }
}

/// Abstract catalog provider trait
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog
    async fn fetch(&self) -> FetchResult<Vec<Book>>;

    /// Short description used in logs
    fn describe(&self) -> String;
}

/// In-memory catalog source (for testing)
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    outcome: std::result::Result<Vec<Book>, String>,
}

impl MemoryCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { outcome: Ok(books) }
    }

    /// A source whose every fetch fails with the given server message
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn fetch(&self) -> FetchResult<Vec<Book>> {
        match &self.outcome {
            Ok(books) => Ok(books.clone()),
            Err(reason) => Err(FetchError::Server(reason.clone())),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_catalog() {
        let source = MemoryCatalog::new(vec![Book::new("Frog and Toad", "Lobel", "frog.jpg", "1")]);
        let books = source.fetch().await.unwrap();
        assert_eq!(books.len(), 1);

        let failing = MemoryCatalog::failing("boom");
        assert!(matches!(failing.fetch().await, Err(FetchError::Server(msg)) if msg == "boom"));
    }

    #[test]
    fn test_source_for() {
        let mut settings = Settings::default();
        assert!(matches!(
            source_for(&settings, None),
            Err(crate::ElloError::Config(ConfigError::Invalid(_)))
        ));

        let file = source_for(&settings, Some(Path::new("catalog.json"))).unwrap();
        assert_eq!(file.describe(), "file catalog.json");

        settings.endpoint = Some("http://localhost:4000/graphql".to_string());
        let remote = source_for(&settings, None).unwrap();
        assert_eq!(remote.describe(), "graphql http://localhost:4000/graphql");

        let file = source_for(&settings, Some(Path::new("catalog.json"))).unwrap();
        assert!(file.describe().starts_with("file"));
    }
}
