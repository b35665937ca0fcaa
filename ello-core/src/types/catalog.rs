//! Shared, immutable catalog handle

use super::Book;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(1);

/// The full book collection from one successful fetch.
///
/// Cloning shares the same books. Equality is identity: every fetch yields a
/// new catalog that compares unequal to the previous one, even when the books
/// are the same. Derived views key their memoization on [`Catalog::id`].
#[derive(Debug, Clone)]
pub struct Catalog {
    id: u64,
    books: Arc<[Book]>,
}

impl Catalog {
    /// Wrap a freshly fetched collection
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            id: NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed),
            books: books.into(),
        }
    }

    /// Identity of this catalog, shared by its clones
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl Deref for Catalog {
    type Target = [Book];

    fn deref(&self) -> &[Book] {
        &self.books
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Catalog {}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}
