pub mod command {
    pub mod add_book_cmd;
    pub mod remove_book_cmd;
    pub mod show_books_cmd;
}
pub mod controller;
pub mod domain;
pub mod factory;
