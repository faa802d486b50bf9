use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::tokenize::convert_numbers;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a whole text file into its lines.
///
/// The file is read eagerly; a missing or unreadable file is reported
/// with its path.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("{}: {} lines", path.display(), lines.len());
    Ok(lines)
}

/// Load every whitespace-separated number in a file, in order.
pub fn load_numbers(path: &Path) -> Result<Vec<f64>> {
    let lines = read_lines(path)?;
    let numbers = convert_numbers(&lines)
        .with_context(|| format!("parsing {}", path.display()))?;
    debug!("{}: {} values", path.display(), numbers.len());
    Ok(numbers)
}
