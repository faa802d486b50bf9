use std::num::ParseFloatError;

use thiserror::Error;

// ---------------------------------------------------------------------------
// SquaresError – every way a computation can fail
// ---------------------------------------------------------------------------

/// Failure raised by the tokenizer or the calculator.
///
/// File access problems are not part of this enum; the loader reports
/// them through `anyhow` with the offending path attached.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SquaresError {
    /// A whitespace-delimited token is not a floating-point literal.
    #[error("line {line}: '{token}' is not a number")]
    Parse {
        token: String,
        /// 1-based index of the input line holding the token.
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    /// Weights were supplied but do not pair up with the numbers.
    #[error("weights and numbers must have same length ({numbers} numbers, {weights} weights)")]
    LengthMismatch { numbers: usize, weights: usize },

    /// No numbers to average; the divisor would be zero.
    #[error("cannot average an empty sequence of numbers")]
    EmptyInput,
}
