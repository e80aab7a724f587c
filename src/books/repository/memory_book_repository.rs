use tracing::debug;
use crate::books::domain::model::Book;
use crate::books::repository::{BookAdder, BookLister, BookRemover};

fn remove_first(books: &mut Vec<Book>, title: &str) -> bool {
    match books.iter().position(|b| b.title == title) {
        Some(ndx) => {
            books.remove(ndx);
            true
        }
        None => false,
    }
}

// Library keeps books in insertion order.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookAdder for Library {
    fn add_book(&mut self, book: Book) {
        debug!("library append {}", book.title);
        self.books.push(book);
    }
}

impl BookRemover for Library {
    fn remove_book(&mut self, title: &str) -> bool {
        remove_first(&mut self.books, title)
    }
}

impl BookLister for Library {
    fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }
}

// SortedLibrary stores in insertion order and lists by title. The sort is
// stable, so equal titles keep their insertion order.
#[derive(Debug, Default)]
pub struct SortedLibrary {
    books: Vec<Book>,
}

impl SortedLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookAdder for SortedLibrary {
    fn add_book(&mut self, book: Book) {
        debug!("sorted library append {}", book.title);
        self.books.push(book);
    }
}

impl BookRemover for SortedLibrary {
    fn remove_book(&mut self, title: &str) -> bool {
        remove_first(&mut self.books, title)
    }
}

impl BookLister for SortedLibrary {
    fn list_books(&self) -> Vec<Book> {
        let mut books = self.books.clone();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        books
    }
}

// ReadonlyLibrary is a frozen view: it copies its books at construction and
// only ever lists them.
#[derive(Debug, Default)]
pub struct ReadonlyLibrary {
    books: Vec<Book>,
}

impl ReadonlyLibrary {
    pub fn new(books: &[Book]) -> Self {
        Self {
            books: books.to_vec(),
        }
    }

    pub fn snapshot(lister: &dyn BookLister) -> Self {
        Self {
            books: lister.list_books(),
        }
    }
}

impl BookLister for ReadonlyLibrary {
    fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }
}
