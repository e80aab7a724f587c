pub mod domain;
pub mod factory;
pub mod showroom;

pub trait Vehicle {
    fn make(&self) -> &str;
    fn model(&self) -> &str;
    // text reported when the engine starts; differs per vehicle type
    fn engine_message(&self) -> String;

    fn start_engine(&self) {
        tracing::info!("{}", self.engine_message());
    }
}
