//! Snippet 3: Generic Concatenation
//! Example: Borrowed slices, owned vectors, and a variadic macro
//!
//! Run with: cargo run --example p3_concatenate

use typed_snippets::{concat_arrays, concat_owned, concatenate_arrays};

fn main() {
    println!("=== Slices (clones elements) ===");
    let joined = concatenate_arrays(&[&[1, 2][..], &[3, 4][..], &[5][..]]);
    println!("concatenate_arrays([1, 2], [3, 4], [5]) = {:?}", joined);

    println!("\n=== Owned (moves elements) ===");
    let words = concat_owned(vec![
        vec!["to".to_string(), "be".to_string()],
        vec!["or".to_string()],
    ]);
    println!("concat_owned(...) = {:?}", words);

    println!("\n=== Variadic Macro ===");
    let joined: Vec<i32> = concat_arrays![[1, 2], [3, 4], [5]];
    println!("concat_arrays![[1, 2], [3, 4], [5]] = {:?}", joined);
    let empty: Vec<i32> = concat_arrays![];
    println!("concat_arrays![] = {:?}", empty);
}
