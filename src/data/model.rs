use std::path::Path;

use anyhow::Result;
use log::debug;

use super::loader::load_numbers;
use crate::error::SquaresError;
use crate::stats::average_of_squares;

// ---------------------------------------------------------------------------
// Inputs – the parsed sequences for one invocation
// ---------------------------------------------------------------------------

/// Numbers and optional positional weights, as read from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    pub numbers: Vec<f64>,
    /// `None` means every number has weight 1.
    pub weights: Option<Vec<f64>>,
}

impl Inputs {
    /// Load the numbers file and, if given, the weights file.
    pub fn from_files(numbers_path: &Path, weights_path: Option<&Path>) -> Result<Self> {
        let numbers = load_numbers(numbers_path)?;
        let weights = weights_path.map(load_numbers).transpose()?;
        debug!(
            "loaded {} numbers, weights: {:?}",
            numbers.len(),
            weights.as_ref().map(Vec::len)
        );
        Ok(Self { numbers, weights })
    }

    /// Number of values to average.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Whether there is nothing to average.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn average_of_squares(&self) -> Result<f64, SquaresError> {
        average_of_squares(&self.numbers, self.weights.as_deref())
    }
}
