use serde::Serialize;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ShowBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ShowBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ShowBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ShowBooksCommandResponse {
    pub books: Vec<Book>,
}

impl<'a> Command<ShowBooksCommandRequest, ShowBooksCommandResponse> for ShowBooksCommand<'a> {
    fn execute(&mut self, _req: ShowBooksCommandRequest) -> Result<ShowBooksCommandResponse, CommandError> {
        Ok(ShowBooksCommandResponse { books: self.catalog_service.show_books() })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::show_books_cmd::{ShowBooksCommand, ShowBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_show_books() {
        let mut svc = factory::create_catalog_service(&Configuration::default());
        svc.add_book("Dune", "Herbert", "1965").expect("should add book");
        svc.add_book("1984", "Orwell", "1949").expect("should add book");

        let res = ShowBooksCommand::new(svc.as_ref())
            .execute(ShowBooksCommandRequest::default()).expect("should show books");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["1984", "Dune"], titles);
    }
}
