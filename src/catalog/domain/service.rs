use tracing::info;
use crate::books::domain::model::Book;
use crate::books::repository::{BookAdder, BookLister, BookRemover, LibraryInterface};
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

pub struct LibraryManager {
    library: Box<dyn LibraryInterface>,
}

impl LibraryManager {
    pub fn new(library: Box<dyn LibraryInterface>) -> Self {
        Self {
            library,
        }
    }
}

fn parse_year(year_text: &str) -> LibraryResult<i64> {
    year_text.trim().parse::<i64>().map_err(|err| {
        LibraryError::validation(format!("year must be a number, got: {}", year_text).as_str(),
                                 Some(err.to_string()))
    })
}

impl CatalogService for LibraryManager {
    // validation is the only failure and it happens before the catalog changes
    fn add_book(&mut self, title: &str, author: &str, year_text: &str) -> LibraryResult<Book> {
        let year = match parse_year(year_text) {
            Ok(year) => year,
            Err(err) => {
                info!("year must be a number, got: {}", year_text);
                return Err(err);
            }
        };
        let book = Book::new(title, author, year);
        self.library.add_book(book.clone());
        info!("added: '{}' ({}, {})", book.title, book.author, book.year);
        Ok(book)
    }

    fn remove_book(&mut self, title: &str) -> bool {
        let removed = self.library.remove_book(title);
        if removed {
            info!("removed: {}", title);
        } else {
            info!("not found: {}", title);
        }
        removed
    }

    fn show_books(&self) -> Vec<Book> {
        let books = self.library.list_books();
        if books.is_empty() {
            info!("library is empty");
        }
        for book in &books {
            info!("Title: {}, Author: {}, Year: {}", book.title, book.author, book.year);
        }
        books
    }
}
