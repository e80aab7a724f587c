pub mod service;

use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

// CatalogService is the façade between the command loop and a catalog: it
// validates raw input and reports each outcome.
pub trait CatalogService {
    // parses year_text and adds the book; a non-numeric year fails validation
    // without touching the catalog
    fn add_book(&mut self, title: &str, author: &str, year_text: &str) -> LibraryResult<Book>;
    // false when no book carries the title
    fn remove_book(&mut self, title: &str) -> bool;
    fn show_books(&self) -> Vec<Book>;
}
