//! Weighted average of squares over whitespace-separated numbers.
//!
//! ```
//! use squares::{average_of_squares, convert_numbers};
//! let numbers = convert_numbers(["2 4"]).unwrap();
//! let weights = convert_numbers(["1", "0.5"]).unwrap();
//! assert_eq!(average_of_squares(&numbers, Some(weights.as_slice())).unwrap(), 6.0);
//! ```

pub mod data;
pub mod error;
pub mod stats;

pub use data::model::Inputs;
pub use data::tokenize::convert_numbers;
pub use error::SquaresError;
pub use stats::{average_of_squares, weighted_sum_of_squares};
