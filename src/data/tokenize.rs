use crate::error::SquaresError;

// ---------------------------------------------------------------------------
// Tokenizer: text lines → flat Vec<f64>
// ---------------------------------------------------------------------------

/// Convert lines of text into numbers, ignoring whitespace.
///
/// Every line is split on runs of whitespace; the tokens of all lines are
/// concatenated in encounter order and each one is parsed as an `f64`.
/// The first token that does not parse aborts the whole conversion.
///
/// ```
/// use squares::convert_numbers;
/// let numbers = convert_numbers(["4", " 8 ", "15 16", " 23    42 "]).unwrap();
/// assert_eq!(numbers, vec![4.0, 8.0, 15.0, 16.0, 23.0, 42.0]);
/// ```
pub fn convert_numbers<I, S>(lines: I) -> Result<Vec<f64>, SquaresError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut numbers = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        for token in line.as_ref().split_whitespace() {
            let value = token.parse::<f64>().map_err(|source| SquaresError::Parse {
                token: token.to_string(),
                line: i + 1,
                source,
            })?;
            numbers.push(value);
        }
    }

    Ok(numbers)
}
