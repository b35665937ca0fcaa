//! Case-insensitive title filter

use crate::types::Book;

/// Whether `title` contains `folded_term` once lowercased.
/// The term must already be lowercased.
pub fn title_matches(title: &str, folded_term: &str) -> bool {
    title.to_lowercase().contains(folded_term)
}

fn active_term(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

/// Positions of the books whose title matches `term`, in catalog order.
/// No term (or an empty one) matches everything.
pub fn filter_indices(books: &[Book], term: Option<&str>) -> Vec<usize> {
    match active_term(term) {
        None => (0..books.len()).collect(),
        Some(folded) => books
            .iter()
            .enumerate()
            .filter(|(_, book)| title_matches(&book.title, &folded))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Books whose title matches `term`, in catalog order
pub fn filter_books<'a>(books: &'a [Book], term: Option<&str>) -> Vec<&'a Book> {
    filter_indices(books, term)
        .into_iter()
        .map(|i| &books[i])
        .collect()
}
