//! A vehicle and a car built by composition.
//!
//! `Car` holds a `Vehicle` rather than extending it; both implement
//! `Describe`, and `Car` forwards to its vehicle for the shared line.

use std::fmt;

/// Anything that can print its one-line summary.
pub trait Describe {
    fn info(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub make: String,
    pub year: u32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }
}

impl Describe for Vehicle {
    fn info(&self) -> String {
        format!("Make:{}, Year: {}", self.make, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    pub model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl Describe for Car {
    fn info(&self) -> String {
        self.vehicle.info()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.info(), self.model_info())
    }
}

pub fn sample_car() -> Car {
    Car::new("Toyota", 2020, "Corolla")
}
