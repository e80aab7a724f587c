use crate::vehicles::factory::{create_vehicle_factory, Region};
use crate::vehicles::Vehicle;

// The fixed demonstration fleet: one car and one motorcycle from each region.
pub fn demo_fleet() -> Vec<Box<dyn Vehicle>> {
    let us_factory = create_vehicle_factory(Region::Us);
    let eu_factory = create_vehicle_factory(Region::Eu);
    vec![
        Box::new(us_factory.create_car("Toyota", "Corolla")) as Box<dyn Vehicle>,
        Box::new(eu_factory.create_motorcycle("Harley-Davidson", "Sportster")),
        Box::new(eu_factory.create_car("Volkswagen", "Golf")),
        Box::new(us_factory.create_motorcycle("Indian", "Scout")),
    ]
}

pub fn start_fleet(fleet: &[Box<dyn Vehicle>]) {
    for vehicle in fleet {
        vehicle.start_engine();
    }
}

#[cfg(test)]
mod tests {
    use crate::vehicles::showroom::{demo_fleet, start_fleet};

    #[test]
    fn test_should_build_demo_fleet() {
        let fleet = demo_fleet();
        let messages: Vec<String> = fleet.iter().map(|v| v.engine_message()).collect();
        assert_eq!(vec![
            "Toyota Corolla (US Spec): engine started".to_string(),
            "Harley-Davidson Sportster (EU Spec): motor started".to_string(),
            "Volkswagen Golf (EU Spec): engine started".to_string(),
            "Indian Scout (US Spec): motor started".to_string(),
        ], messages);
        start_fleet(&fleet);
    }
}
