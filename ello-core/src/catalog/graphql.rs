//! Remote catalog fetched with the `books` GraphQL query

use super::wire::{decode_books, GraphQlRequest};
use super::{CatalogSource, FetchResult};
use crate::error::FetchError;
use crate::types::Book;
use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

/// GraphQL-backed catalog source
#[derive(Debug, Clone)]
pub struct GraphQlCatalog {
    endpoint: String,
    http_client: reqwest::Client,
}

impl GraphQlCatalog {
    /// Create a source posting to the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a source whose requests give up after `timeout`
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http_client,
        })
    }
}

#[async_trait]
impl CatalogSource for GraphQlCatalog {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> FetchResult<Vec<Book>> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&GraphQlRequest::books())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let books = decode_books(&body)?;
        tracing::debug!("Fetched {} books", books.len());
        Ok(books)
    }

    fn describe(&self) -> String {
        format!("graphql {}", self.endpoint)
    }
}
