//! Car record type definition

use serde::{Deserialize, Serialize};

/// A car with a paint color, a model name, and a fuel tank capacity.
///
/// Every field is freely mutable and nothing is validated: an unset color
/// or model stays `None`, and a negative tank capacity is stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    color: Option<String>,
    model: Option<String>,
    tank_capacity: i32,
}

impl Car {
    pub fn new(color: Option<String>, model: Option<String>, tank_capacity: i32) -> Self {
        Self {
            color,
            model,
            tank_capacity,
        }
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn set_model(&mut self, model: Option<String>) {
        self.model = model;
    }

    pub fn tank_capacity(&self) -> i32 {
        self.tank_capacity
    }

    pub fn set_tank_capacity(&mut self, tank_capacity: i32) {
        self.tank_capacity = tank_capacity;
    }

    /// Value of a full tank at the given fuel price. Negative or zero
    /// inputs propagate arithmetically.
    pub fn total_tank_value(&self, fuel_price: f64) -> f64 {
        self.tank_capacity as f64 * fuel_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let car = Car::default();
        assert_eq!(car.color(), None);
        assert_eq!(car.model(), None);
        assert_eq!(car.tank_capacity(), 0);
    }

    #[test]
    fn test_new_sets_all_fields() {
        let car = Car::new(Some("red".to_string()), Some("hatch".to_string()), 55);
        assert_eq!(car.color(), Some("red"));
        assert_eq!(car.model(), Some("hatch"));
        assert_eq!(car.tank_capacity(), 55);
    }

    #[test]
    fn test_setters_round_trip() {
        let mut car = Car::default();

        car.set_color(Some("blue".to_string()));
        assert_eq!(car.color(), Some("blue"));
        car.set_color(None);
        assert_eq!(car.color(), None);

        car.set_model(Some("sedan".to_string()));
        assert_eq!(car.model(), Some("sedan"));

        car.set_tank_capacity(-10);
        assert_eq!(car.tank_capacity(), -10);
    }

    #[test]
    fn test_total_tank_value() {
        let mut car = Car::default();
        car.set_tank_capacity(55);
        assert!((car.total_tank_value(5.79) - 318.45).abs() < 1e-9);
    }

    #[test]
    fn test_total_tank_value_zero_price() {
        let car = Car::new(None, None, 55);
        assert_eq!(car.total_tank_value(0.0), 0.0);
    }

    #[test]
    fn test_total_tank_value_negative_capacity() {
        let car = Car::new(None, None, -10);
        assert_eq!(car.total_tank_value(2.0), -20.0);
    }
}
