use lms_patterns::utils::tracing::setup_tracing;
use lms_patterns::vehicles::showroom::{demo_fleet, start_fleet};

fn main() {
    setup_tracing();
    start_fleet(&demo_fleet());
}
