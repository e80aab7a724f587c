pub mod core {
    pub mod command;
    pub mod domain;
    pub mod library;
}

pub mod books;
pub mod catalog;
pub mod vehicles;

pub mod utils {
    pub mod tracing;
}
