//! Snippet 6: Most Expensive Product
//! Example: reduce returning Option<&T>
//!
//! Run with: cargo run --example p6_most_expensive

use typed_snippets::most_expensive;
use typed_snippets::products::sample_products;

fn main() {
    let products = sample_products();

    println!("=== Products ===");
    for product in &products {
        println!("  {:<10} {:>6.2}", product.name, product.price);
    }

    println!("\n=== Maximum by Price ===");
    match most_expensive(&products) {
        Some(product) => println!("Most expensive: {} ({})", product.name, product.price),
        None => println!("No products"),
    }

    // Usage: empty input is an explicit None, not a panic.
    println!("most_expensive([]) = {:?}", most_expensive(&[]));
}
