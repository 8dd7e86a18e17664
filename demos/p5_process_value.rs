//! Snippet 5: Text-or-Number Transform
//! Example: Two-variant enum instead of a runtime type check
//!
//! Run with: cargo run --example p5_process_value

use typed_snippets::{process_value, Value};

fn main() {
    println!("=== Exhaustive Match on Value ===");
    let values = vec![Value::from("abc"), Value::from(50), Value::from(2.5)];
    for value in &values {
        println!("process_value({:?}) = {}", value, process_value(value));
    }
}
