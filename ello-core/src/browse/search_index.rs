//! Autocomplete options derived from the catalog

use super::filter::title_matches;
use crate::types::{Book, SearchOption};

/// One option per book, in catalog order
pub fn derive_options(books: &[Book]) -> Vec<SearchOption> {
    books.iter().map(SearchOption::from).collect()
}

/// Options whose title contains the draft text, case-insensitively, under the
/// same rule as the title filter. An empty draft offers every option.
pub fn suggest<'a>(options: &'a [SearchOption], draft: &str) -> Vec<&'a SearchOption> {
    let folded = draft.to_lowercase();
    options
        .iter()
        .filter(|option| folded.is_empty() || title_matches(&option.title, &folded))
        .collect()
}

/// Resolve a cover path against the asset root, joining with a single `/`
pub fn resolve_cover(asset_root: &str, cover_photo_url: &str) -> String {
    let path = cover_photo_url.trim_start_matches('/');
    let root = asset_root.trim_end_matches('/');
    format!("{}/{}", root, path)
}
