//! Snippet 4: Vehicle and Car
//! Example: Composition and a shared trait instead of inheritance
//!
//! Run with: cargo run --example p4_vehicle_car

use typed_snippets::{Car, Describe, Vehicle};

// Works for anything that can describe itself.
fn print_info(item: &impl Describe) {
    println!("{}", item.info());
}

fn main() {
    let my_car = Car::new("Toyota", 2020, "Corolla");

    println!("=== Car ===");
    print_info(&my_car);
    println!("{}", my_car.model_info());

    println!("\n=== Plain Vehicle ===");
    print_info(&Vehicle::new("Ford", 1999));

    println!("\n=== Embedded Vehicle ===");
    println!("{:?}", my_car.vehicle());
}
