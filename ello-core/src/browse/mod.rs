//! Pure browsing stages: title filter, page slicing, autocomplete options and
//! the reading list. None of these can fail.

mod filter;
mod memo;
mod paginate;
mod reading_list;
mod search_index;

pub use filter::{filter_books, filter_indices, title_matches};
pub use memo::Memo;
pub use paginate::{page_count, paginate};
pub use reading_list::ReadingList;
pub use search_index::{derive_options, resolve_cover, suggest};

/// Number of books shown per page
pub const BOOKS_PER_PAGE: usize = 8;
