//! The in-session reading list

use crate::types::Book;

/// Ordered collection of books the user has marked.
///
/// Membership is decided by title. `add` appends without checking, so the same
/// title can appear twice; `remove` drops every entry with that title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingList {
    entries: Vec<Book>,
}

impl ReadingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book unconditionally
    pub fn add(&mut self, book: &Book) {
        self.entries.push(book.clone());
    }

    /// Remove every entry sharing the book's title. Returns how many were removed.
    pub fn remove(&mut self, book: &Book) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.same_title(book));
        before - self.entries.len()
    }

    pub fn is_member(&self, book: &Book) -> bool {
        self.entries.iter().any(|entry| entry.same_title(book))
    }

    /// Remove the book if it is listed, add it otherwise.
    /// Returns whether the book is listed afterwards.
    pub fn toggle(&mut self, book: &Book) -> bool {
        if self.is_member(book) {
            self.remove(book);
            false
        } else {
            self.add(book);
            true
        }
    }

    pub fn find(&self, title: &str) -> Option<&Book> {
        self.entries.iter().find(|entry| entry.title == title)
    }

    pub fn entries(&self) -> &[Book] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frog() -> Book {
        Book::new("Frog and Toad", "Lobel", "frog.jpg", "1")
    }

    fn moon() -> Book {
        Book::new("Goodnight Moon", "Brown", "moon.jpg", "1")
    }

    #[test]
    fn test_add_then_remove_restores() {
        let mut list = ReadingList::new();
        list.add(&moon());
        let before = list.clone();

        list.add(&frog());
        assert!(list.is_member(&frog()));
        list.remove(&frog());
        assert_eq!(list, before);
    }

    #[test]
    fn test_duplicate_add_single_remove_clears_both() {
        let mut list = ReadingList::new();
        list.add(&frog());
        list.add(&frog());
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove(&frog()), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn test_membership_by_title() {
        let mut list = ReadingList::new();
        list.add(&frog());
        let renamed_cover = Book::new("Frog and Toad", "Lobel", "frog-v2.jpg", "1");
        assert!(list.is_member(&renamed_cover));
        assert!(!list.is_member(&moon()));
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut list = ReadingList::new();
        assert!(list.toggle(&frog()));
        assert!(!list.toggle(&frog()));
        assert!(list.is_empty());
        assert!(list.toggle(&frog()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.find("Frog and Toad"), Some(&frog()));
    }

    #[test]
    fn test_insertion_order() {
        let mut list = ReadingList::new();
        list.add(&moon());
        list.add(&frog());
        let titles: Vec<_> = list.entries().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Goodnight Moon", "Frog and Toad"]);
    }
}
