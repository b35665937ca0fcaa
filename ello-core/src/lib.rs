//! Ello Core Library
//!
//! This crate provides the catalog types and the browsing state machine for the Ello Books
//! reading-list app. A catalog is fetched once from a [`catalog::CatalogSource`], then
//! filtered by title, sliced into pages and curated into an in-session reading list.

pub mod browse;
pub mod catalog;
pub mod error;
pub mod session;
pub mod settings;
pub mod types;

pub use error::{ConfigError, ElloError, FetchError, Result};
pub use session::{HomePage, LoadState, PageView};
pub use settings::{PagePolicy, Settings, Theme};
pub use types::{Book, Catalog, SearchOption};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Frog and Toad", "Arnold Lobel", "frog.jpg", "1");
        assert_eq!(book.title, "Frog and Toad");
        assert_eq!(book.reading_level, "1");
    }
}
