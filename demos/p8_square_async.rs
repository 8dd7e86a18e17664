//! Snippet 8: Delayed Squaring
//! Example: Validate first, then sleep
//!
//! Run with: cargo run --example p8_square_async

use std::time::Instant;
use typed_snippets::{spawn_square, square_async, SQUARE_DELAY};

#[tokio::main]
async fn main() {
    println!("=== square_async ===");
    let start = Instant::now();
    match square_async(-3.0).await {
        Ok(n) => println!("square(-3) = {}", n),
        Err(e) => println!("square(-3) failed after {:?}: {}", start.elapsed(), e),
    }

    let start = Instant::now();
    match square_async(4.0).await {
        Ok(n) => println!("square(4) = {} after {:?}", n, start.elapsed()),
        Err(e) => println!("square(4) failed: {}", e),
    }

    println!("\n=== spawn_square ===");
    // Usage: the error comes back before anything is scheduled.
    match spawn_square(-1.0, SQUARE_DELAY) {
        Ok(_) => println!("unexpected: task scheduled"),
        Err(e) => println!("spawn_square(-1) rejected: {}", e),
    }

    match spawn_square(7.0, SQUARE_DELAY) {
        Ok(handle) => match handle.await {
            Ok(n) => println!("spawn_square(7) = {}", n),
            Err(e) => println!("task failed: {}", e),
        },
        Err(e) => println!("spawn_square(7) rejected: {}", e),
    }
}
