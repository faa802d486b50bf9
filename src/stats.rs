//! Weighted sum and average of squares.
//!
//! The average divides by the number of elements, not by the sum of the
//! weights. With weights that do not sum to the element count the result
//! is a count-normalised weighted sum of squares rather than a weighted
//! mean. Summation runs left to right over the positional pairs.

use crate::error::SquaresError;

/// Sum of `weight * number * number` over positional pairs.
///
/// Absent weights count as 1 for every element. Mismatched lengths fail
/// before any arithmetic is done.
pub fn weighted_sum_of_squares(
    numbers: &[f64],
    weights: Option<&[f64]>,
) -> Result<f64, SquaresError> {
    match weights {
        Some(weights) => {
            if weights.len() != numbers.len() {
                return Err(SquaresError::LengthMismatch {
                    numbers: numbers.len(),
                    weights: weights.len(),
                });
            }
            Ok(numbers
                .iter()
                .zip(weights)
                .map(|(&n, &w)| w * n * n)
                .sum())
        }
        None => Ok(numbers.iter().map(|&n| n * n).sum()),
    }
}

/// Weighted average of squares, normalised by the element count.
///
/// # Errors
/// - [`SquaresError::LengthMismatch`] if `weights` is given with a
///   different length than `numbers`.
/// - [`SquaresError::EmptyInput`] if `numbers` is empty.
///
/// # Examples
/// ```
/// use squares::average_of_squares;
/// assert_eq!(average_of_squares(&[1.0, 2.0, 4.0], None).unwrap(), 7.0);
/// assert_eq!(average_of_squares(&[2.0, 4.0], Some(&[1.0, 0.5])).unwrap(), 6.0);
/// assert!(average_of_squares(&[1.0, 2.0, 4.0], Some(&[1.0, 0.5])).is_err());
/// ```
pub fn average_of_squares(numbers: &[f64], weights: Option<&[f64]>) -> Result<f64, SquaresError> {
    let sum = weighted_sum_of_squares(numbers, weights)?;
    if numbers.is_empty() {
        return Err(SquaresError::EmptyInput);
    }
    Ok(sum / numbers.len() as f64)
}
