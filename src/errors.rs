//! Error types for puzzle construction and generation, with error codes
//! and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - C001: `EmptyVocabulary` (No words supplied)
//! - C002: `NoAlphabeticChars` (A word contains no A-Z characters)
//! - C003: `EmptyGrid` (Grid has no rows)
//! - C004: `RaggedGrid` (Grid rows have inconsistent lengths)
//! - C005: `InvalidDimensions` (Rows or columns is zero)
//! - C006: `Io` (Underlying I/O failure while loading input)
//! - G001: `Unplaceable` (Backtracking search exhausted without a full placement)
//!
//! `C*` codes are **Configuration** errors: the same input will fail the same
//! way, so retrying unchanged is never useful. `G*` codes are **Infeasible**
//! errors: the input was valid but the search found no solution, and a retry
//! with different randomness or parameters may succeed.
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::{ErrorClass, PuzzleError};
//!
//! let err = PuzzleError::EmptyVocabulary;
//! assert_eq!(err.code(), "C001");
//! assert_eq!(err.class(), ErrorClass::Configuration);
//! println!("{}", err.display_detailed());
//! ```

use std::io;

/// Whether an error is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad dimensions or vocabulary; never safe to retry unchanged.
    Configuration,
    /// Valid input, but the search found no solution; safe to retry with
    /// different randomness or parameters.
    Infeasible,
}

/// Unified error type for the solver and generator pipelines.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The vocabulary is empty, so there is nothing to search for or place.
    #[error("empty vocabulary")]
    EmptyVocabulary,

    /// A word contains no A-Z characters at all. Inserting it would create
    /// a zero-length pattern that matches everywhere.
    #[error("word \"{word}\" contains no alphabetic characters")]
    NoAlphabeticChars { word: String },

    /// The grid input has no rows.
    #[error("grid is empty")]
    EmptyGrid,

    /// A grid row's length differs from the first row's.
    #[error("grid row {row} has length {found}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Rows or columns is zero.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// I/O failure while loading a word list or grid file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backtracking search exhausted every (direction, orientation,
    /// anchor) combination for every word without finding a full placement.
    #[error("could not place all {word_count} words in a {rows}x{cols} grid")]
    Unplaceable {
        word_count: usize,
        rows: usize,
        cols: usize,
    },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyVocabulary => "C001",
            PuzzleError::NoAlphabeticChars { .. } => "C002",
            PuzzleError::EmptyGrid => "C003",
            PuzzleError::RaggedGrid { .. } => "C004",
            PuzzleError::InvalidDimensions { .. } => "C005",
            PuzzleError::Io(_) => "C006",
            PuzzleError::Unplaceable { .. } => "G001",
        }
    }

    /// Classifies the error as Configuration (never retry unchanged) or
    /// Infeasible (retry with different randomness may succeed).
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            PuzzleError::Unplaceable { .. } => ErrorClass::Infeasible,
            _ => ErrorClass::Configuration,
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyVocabulary => {
                Some("Provide at least one word, e.g. a file with one word per line")
            }
            PuzzleError::NoAlphabeticChars { .. } => {
                Some("Words must contain at least one letter A-Z; digits and punctuation are ignored")
            }
            PuzzleError::RaggedGrid { .. } => {
                Some("Every grid row must have the same number of characters")
            }
            PuzzleError::InvalidDimensions { .. } => {
                Some("Rows and columns must both be at least 1")
            }
            PuzzleError::Unplaceable { .. } => Some(
                "Try a larger grid, fewer words, or a different --seed; randomized mode can place words best-effort",
            ),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
