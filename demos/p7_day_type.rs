//! Snippet 7: Weekday Classifier
//! Example: Closed enum mapped to a binary classification
//!
//! Run with: cargo run --example p7_day_type

use typed_snippets::{day_type, Day};

fn main() {
    println!("=== Classify Sunday ===");
    println!("day_type(Sunday) = {}", day_type(Day::Sunday));

    println!("\n=== Whole Week ===");
    for day in Day::ALL {
        println!("  {:<10} {}", day, day_type(day));
    }

    println!("\n=== Parsing Names ===");
    for name in ["saturday", "Funday"] {
        match name.parse::<Day>() {
            Ok(day) => println!("  '{}' -> {} ({})", name, day, day_type(day)),
            Err(e) => println!("  '{}' -> Error: {}", name, e),
        }
    }
}
