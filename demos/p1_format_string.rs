//! Snippet 1: Case Formatting
//! Example: Optional direction flag with Option<bool>
//!
//! Run with: cargo run --example p1_format_string

use typed_snippets::format_string;

fn main() {
    println!("=== Case Formatting ===");
    // Usage: only an explicit Some(false) lower-cases.
    println!("format_string(\"Hello\", Some(false)) = {}", format_string("Hello", Some(false)));
    println!("format_string(\"Hello\", Some(true))  = {}", format_string("Hello", Some(true)));
    println!("format_string(\"Hello\", None)        = {}", format_string("Hello", None));
}
