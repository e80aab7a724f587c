pub mod memory_book_repository;

use crate::books::domain::model::Book;

// Each capability role exposes exactly one catalog operation so callers can
// depend on the narrowest one they need.

pub trait BookAdder {
    // appends a book to the catalog
    fn add_book(&mut self, book: Book);
}

pub trait BookRemover {
    // removes the first book with exactly this title, returns whether one existed
    fn remove_book(&mut self, title: &str) -> bool;
}

pub trait BookLister {
    // snapshot copies of the catalog contents
    fn list_books(&self) -> Vec<Book>;
}

/// Full read-write catalog composed from the three capability roles.
pub trait LibraryInterface: BookAdder + BookRemover + BookLister {}

impl<T: BookAdder + BookRemover + BookLister> LibraryInterface for T {}
