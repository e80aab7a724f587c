use std::io;
use lms_patterns::catalog::controller::CatalogController;
use lms_patterns::catalog::factory;
use lms_patterns::core::domain::Configuration;
use lms_patterns::core::library::LibraryError;
use lms_patterns::utils::tracing::setup_tracing;

fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let config = Configuration::default();
    let mut controller = CatalogController::new(factory::create_catalog_service(&config));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    controller.run(&mut input, &mut output)
}
