use serde::{Deserialize, Serialize};

// CatalogKind selects which catalog implementation backs the manager
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum CatalogKind {
    Insertion,
    #[default]
    Sorted,
}

// Configuration abstracts config options for the catalog program
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Configuration {
    pub catalog: CatalogKind,
}

impl Configuration {
    pub fn new(catalog: CatalogKind) -> Self {
        Configuration {
            catalog,
        }
    }
}
