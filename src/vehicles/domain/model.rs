use crate::vehicles::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub make: String,
    pub model: String,
}

impl Car {
    pub fn new(make: &str, model: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        self.make.as_str()
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }

    fn engine_message(&self) -> String {
        format!("{} {}: engine started", self.make, self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    pub make: String,
    pub model: String,
}

impl Motorcycle {
    pub fn new(make: &str, model: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        self.make.as_str()
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }

    fn engine_message(&self) -> String {
        format!("{} {}: motor started", self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use crate::vehicles::domain::model::{Car, Motorcycle};
    use crate::vehicles::Vehicle;

    #[test]
    fn test_should_build_car() {
        let car = Car::new("Toyota", "Corolla");
        assert_eq!("Toyota", car.make());
        assert_eq!("Corolla", car.model());
        assert_eq!("Toyota Corolla: engine started", car.engine_message().as_str());
        car.start_engine();
    }

    #[test]
    fn test_should_build_motorcycle() {
        let bike = Motorcycle::new("Indian", "Scout");
        assert_eq!("Indian Scout: motor started", bike.engine_message().as_str());
        bike.start_engine();
    }

    #[test]
    fn test_should_accept_empty_text() {
        assert_eq!(" : engine started", Car::new("", "").engine_message().as_str());
    }
}
