//! Autocomplete options projected from the catalog

use super::Book;
use serde::{Deserialize, Serialize};

/// A title/cover pair offered as an autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOption {
    pub title: String,

    #[serde(rename = "coverPhotoURL")]
    pub cover_photo_url: String,
}

impl From<&Book> for SearchOption {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            cover_photo_url: book.cover_photo_url.clone(),
        }
    }
}
