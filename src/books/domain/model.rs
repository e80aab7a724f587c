use serde::{Deserialize, Serialize};

// Book is a plain catalog record keyed by its title; it is never mutated once
// it enters a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl Book {
    pub fn new(title: &str, author: &str, year: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }
}
