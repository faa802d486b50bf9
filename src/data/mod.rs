/// Data layer: file input, tokenizing, and the loaded inputs.
///
/// Architecture:
/// ```text
///  FILE_NUMBERS  [--weights FILE_WEIGHTS]
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → Vec<String> lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ tokenize  │  split on whitespace → Vec<f64>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Inputs { numbers, weights } → stats::average_of_squares
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod tokenize;
