use crate::books::repository::LibraryInterface;
use crate::books::repository::memory_book_repository::{Library, SortedLibrary};
use crate::core::domain::CatalogKind;

pub fn create_library(kind: CatalogKind) -> Box<dyn LibraryInterface> {
    match kind {
        CatalogKind::Insertion => Box::new(Library::new()),
        CatalogKind::Sorted => Box::new(SortedLibrary::new()),
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::books::factory::create_library;
    use crate::books::repository::{BookAdder, BookLister};
    use crate::core::domain::CatalogKind;

    #[test]
    fn test_should_create_library_per_kind() {
        let mut insertion = create_library(CatalogKind::Insertion);
        let mut sorted = create_library(CatalogKind::Sorted);
        for library in [&mut insertion, &mut sorted] {
            library.add_book(Book::new("b", "x", 1));
            library.add_book(Book::new("a", "y", 2));
        }
        assert_eq!("b", insertion.list_books()[0].title.as_str());
        assert_eq!("a", sorted.list_books()[0].title.as_str());
    }
}
