//! # Utilkit Core
//!
//! Small, independent utilities for everyday programming chores.
//!
//! ## Features
//!
//! - Calendar date validation with leap-year rules
//! - A bounded number-guessing simulation with injectable guess sources
//! - Order-preserving unique word extraction
//! - Overflow-checked factorial
//! - `Debouncer`: collapses bursts of calls into one delayed call (Tokio timers)
//! - `Memoizer`: per-instance result cache keyed by serialized arguments
//! - Record transforms: sort products by price, total sales per customer
//! - Conversion between key/value pairs and maps
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::{factorial, is_valid_date, unique_words, Memoizer};
//!
//! assert!(is_valid_date(29, 2, 2024));
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert_eq!(unique_words("a a b"), vec!["a", "b"]);
//!
//! let double = Memoizer::new(|n: &i32| n * 2);
//! assert_eq!(double.call(&21).unwrap(), 42);
//! ```

mod config;
mod date;
mod debounce;
mod error;
mod factorial;
mod guess;
mod key;
mod memo;
mod pairs;
mod records;
mod words;

pub use config::GameConfig;
pub use date::{days_in_month, is_leap_year, is_valid_date, is_valid_date_value};
pub use debounce::Debouncer;
pub use error::UtilError;
pub use factorial::{factorial, MAX_FACTORIAL_INPUT};
pub use guess::{GameOutcome, GuessSource, GuessingGame, Hint, RandomGuesses, Round, ScriptedGuesses};
pub use memo::Memoizer;
pub use pairs::{object_to_pairs, pairs_to_object};
pub use records::{group_sales_by_customer, sort_products_by_price, Product, Sale};
pub use words::unique_words;
