//! Loading and preprocessing the puzzle vocabulary.
//!
//! The parsing logic:
//! - One word per line; surrounding whitespace is trimmed.
//! - Blank lines are skipped.
//! - Words are kept in file order and in their original case; the
//!   automaton and the generator normalize to uppercase themselves, and
//!   placement order is meaningful to the generator.
//! - An input with no words at all is a Configuration error, caught here
//!   rather than deep inside the automaton.
//!
//! The public API mirrors how this crate loads grids: `parse_from_str` for
//! in-memory contents, `load_from_path` as the file convenience.

use crate::errors::PuzzleError;
use crate::grid::Grid;

/// A processed, ready-to-use vocabulary.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Words in input order, whitespace-trimmed, case preserved.
    pub words: Vec<String>,
}

impl WordList {
    /// Parses a word list from in-memory contents, one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyVocabulary`] if no non-blank line exists.
    pub fn parse_from_str(contents: &str) -> Result<WordList, PuzzleError> {
        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(PuzzleError::EmptyVocabulary);
        }
        Ok(WordList { words })
    }

    /// Reads and parses a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] if the file cannot be read, or
    /// [`PuzzleError::EmptyVocabulary`] if it contains no words.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        Self::parse_from_str(&data)
    }
}

/// Parses a puzzle grid from file contents: one row per line, characters
/// adjacent. Interior whitespace is stripped (some grid files space out
/// their letters), blank lines are skipped.
///
/// # Errors
///
/// Returns [`PuzzleError::EmptyGrid`] or [`PuzzleError::RaggedGrid`] per
/// [`Grid::from_rows`].
pub fn parse_grid_from_str(contents: &str) -> Result<Grid, PuzzleError> {
    let rows: Vec<String> = contents
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect();
    Grid::from_rows(&rows)
}

/// Reads and parses a grid file.
///
/// # Errors
///
/// Returns [`PuzzleError::Io`] on read failure, plus everything
/// [`parse_grid_from_str`] can return.
pub fn load_grid_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Grid, PuzzleError> {
    let path_ref = path.as_ref();
    let data = std::fs::read_to_string(path_ref).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read grid from '{}': {}", path_ref.display(), e),
        )
    })?;
    parse_grid_from_str(&data)
}
