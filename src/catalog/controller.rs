use std::io::{BufRead, Write};
use tracing::{info, warn};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::show_books_cmd::{ShowBooksCommand, ShowBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";

#[derive(Debug, PartialEq, Clone)]
pub enum CatalogAction {
    Add,
    Remove,
    Show,
    Exit,
    Invalid(String),
}

impl CatalogAction {
    pub fn parse(line: &str) -> Self {
        let cmd = line.trim().to_lowercase();
        match cmd.as_str() {
            "add" => CatalogAction::Add,
            "remove" => CatalogAction::Remove,
            "show" => CatalogAction::Show,
            "exit" => CatalogAction::Exit,
            _ => CatalogAction::Invalid(cmd),
        }
    }
}

// CatalogController drives the read-eval loop: it prompts on the output stream,
// reads commands and field values from the input, and dispatches each action
// to the catalog service through its command.
pub struct CatalogController {
    catalog_service: Box<dyn CatalogService>,
}

impl CatalogController {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }

    pub fn catalog_service(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    // Runs until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> LibraryResult<()> {
        loop {
            let line = match prompt(input, output, COMMAND_PROMPT)? {
                Some(line) => line,
                None => return Ok(()),
            };
            let action = CatalogAction::parse(line.as_str());
            let res = match action {
                CatalogAction::Exit => return Ok(()),
                CatalogAction::Add => {
                    match read_add_request(input, output)? {
                        Some(req) => AddBookCommand::new(self.catalog_service.as_mut()).execute(req).map(|_| ()),
                        None => return Ok(()),
                    }
                }
                CatalogAction::Remove => {
                    match prompt(input, output, "Enter book title to remove: ")? {
                        Some(title) => {
                            let req = RemoveBookCommandRequest::new(title.as_str());
                            RemoveBookCommand::new(self.catalog_service.as_mut()).execute(req).map(|_| ())
                        }
                        None => return Ok(()),
                    }
                }
                CatalogAction::Show => {
                    ShowBooksCommand::new(self.catalog_service.as_ref())
                        .execute(ShowBooksCommandRequest::default()).map(|_| ())
                }
                CatalogAction::Invalid(_) => {
                    info!("Invalid command. Please try again.");
                    Ok(())
                }
            };
            match res {
                Ok(()) => {}
                // already reported by the service
                Err(CommandError::Validation { .. }) => {}
                Err(err) => warn!("command failed {:?}", err),
            }
        }
    }
}

fn read_add_request<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> LibraryResult<Option<AddBookCommandRequest>> {
    let title = match prompt(input, output, "Enter book title: ")? {
        Some(title) => title,
        None => return Ok(None),
    };
    let author = match prompt(input, output, "Enter book author: ")? {
        Some(author) => author,
        None => return Ok(None),
    };
    let year = match prompt(input, output, "Enter book year: ")? {
        Some(year) => year,
        None => return Ok(None),
    };
    Ok(Some(AddBookCommandRequest::new(title.as_str(), author.as_str(), year.as_str())))
}

// Writes the prompt and reads one trimmed line; None at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> LibraryResult<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
