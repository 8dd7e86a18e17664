//! Snippet 2: Filtering by Rating
//! Example: Order-preserving filter over borrowed records
//!
//! Run with: cargo run --example p2_filter_by_rating

use typed_snippets::ratings::sample_books;
use typed_snippets::{filter_by_rating, MIN_RATING};

fn main() {
    let books = sample_books();

    println!("=== All Books ===");
    for book in &books {
        println!("  {} ({})", book.title, book.rating);
    }

    println!("\n=== Rated {} or Higher ===", MIN_RATING);
    let kept = filter_by_rating(&books);
    for book in &kept {
        println!("  {} ({})", book.title, book.rating);
    }
    println!("\nKept {} of {} books", kept.len(), books.len());
}
