use crate::vehicles::domain::model::{Car, Motorcycle};

// Region is the manufacturing/compliance market a factory builds for
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub fn spec_suffix(&self) -> &'static str {
        match self {
            Region::Us => " (US Spec)",
            Region::Eu => " (EU Spec)",
        }
    }

    fn spec_model(&self, model: &str) -> String {
        format!("{}{}", model, self.spec_suffix())
    }
}

pub trait VehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Car;
    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle;
}

#[derive(Debug, Default)]
pub struct USVehicleFactory {}

impl VehicleFactory for USVehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, Region::Us.spec_model(model).as_str())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, Region::Us.spec_model(model).as_str())
    }
}

#[derive(Debug, Default)]
pub struct EUVehicleFactory {}

impl VehicleFactory for EUVehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, Region::Eu.spec_model(model).as_str())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, Region::Eu.spec_model(model).as_str())
    }
}

pub fn create_vehicle_factory(region: Region) -> Box<dyn VehicleFactory> {
    match region {
        Region::Us => Box::new(USVehicleFactory::default()),
        Region::Eu => Box::new(EUVehicleFactory::default()),
    }
}
