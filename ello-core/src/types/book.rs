//! The Book record as delivered by the catalog query

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The title is the unique key within a catalog; reading-list membership and
/// removal compare titles, never whole records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,

    pub author: String,

    /// Cover image path relative to the asset root
    #[serde(rename = "coverPhotoURL")]
    pub cover_photo_url: String,

    pub reading_level: String,
}

impl Book {
    /// Create a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        cover_photo_url: impl Into<String>,
        reading_level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cover_photo_url: cover_photo_url.into(),
            reading_level: reading_level.into(),
        }
    }

    /// Whether two records refer to the same catalog entry
    pub fn same_title(&self, other: &Book) -> bool {
        self.title == other.title
    }
}
