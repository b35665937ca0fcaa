//! Core types shared by the catalog sources and the browsing state

mod book;
mod catalog;
mod option;

pub use book::Book;
pub use catalog::Catalog;
pub use option::SearchOption;
