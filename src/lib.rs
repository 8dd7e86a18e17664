//! # Typed Snippets
//!
//! Eight small, unrelated snippets, each a single typed operation with a
//! hard-coded sample:
//!
//! ## Snippet 1: Case Formatting
//! - `Option<bool>` as an optional direction flag
//!
//! ## Snippet 2: Filtering by Rating
//! - Order-preserving `filter` over borrowed records
//!
//! ## Snippet 3: Generic Concatenation
//! - Slices of slices, owned iterables, and a variadic macro
//!
//! ## Snippet 4: Vehicle and Car
//! - Composition plus a shared trait instead of inheritance
//!
//! ## Snippet 5: Text-or-Number Transform
//! - Two-variant enum dispatched with an exhaustive `match`
//!
//! ## Snippet 6: Most Expensive Product
//! - `reduce` returning `Option<&T>`
//!
//! ## Snippet 7: Weekday Classifier
//! - Closed enum mapped to a binary classification
//!
//! ## Snippet 8: Delayed Squaring
//! - Validation before `tokio::time::sleep`, plus a spawned-task variant
//!
//! Run any snippet with:
//! ```bash
//! cargo run --example <example_name>
//! ```
//!
//! Or the whole tour:
//! ```bash
//! cargo run --bin snippet_tour -- [config.toml]
//! ```

pub mod concat;
pub mod config;
pub mod day;
pub mod error;
pub mod logging;
pub mod products;
pub mod ratings;
pub mod report;
pub mod square;
pub mod text;
pub mod value;
pub mod vehicle;

pub use concat::{concat_owned, concatenate_arrays};
pub use config::TourConfig;
pub use day::{day_type, Day, DayType};
pub use error::{ConfigError, SnippetError};
pub use products::{most_expensive, Product};
pub use ratings::{filter_by_min_rating, filter_by_rating, Book, MIN_RATING};
pub use square::{spawn_square, square_after, square_async, SQUARE_DELAY};
pub use text::format_string;
pub use value::{process_value, Value};
pub use vehicle::{Car, Describe, Vehicle};
