use crate::books::factory::create_library;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::LibraryManager;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let library = create_library(config.catalog);
    Box::new(LibraryManager::new(library))
}
