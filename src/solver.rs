//! The word-search solver: one automaton scan per grid line, matches mapped
//! back to 2D coordinates and deduplicated by placement.
//!
//! # Examples
//!
//! ```
//! use wordgrid::grid::Grid;
//! use wordgrid::solver::{solve, FoundDirection};
//!
//! let grid = Grid::from_rows(&["CATDOG", "XXXXXX"])?;
//! let found = solve(&grid, &["cat"])?;
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].word, "CAT");
//! assert_eq!((found[0].start_row, found[0].start_col), (0, 0));
//! assert_eq!((found[0].end_row, found[0].end_col), (0, 2));
//! assert_eq!(found[0].direction, FoundDirection::Horizontal);
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```
//!
//! A word written backwards is reported with the `_REVERSE` tag, its
//! coordinates swapped so "start" is where the forward reading begins, and
//! its text in canonical spelling:
//!
//! ```
//! use wordgrid::grid::Grid;
//! use wordgrid::solver::{solve, FoundDirection};
//!
//! let grid = Grid::from_rows(&["TAC"])?;
//! let found = solve(&grid, &["cat"])?;
//!
//! assert_eq!(found[0].word, "CAT");
//! assert_eq!((found[0].start_row, found[0].start_col), (0, 2));
//! assert_eq!((found[0].end_row, found[0].end_col), (0, 0));
//! assert_eq!(found[0].direction, FoundDirection::HorizontalReverse);
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```

use crate::automaton::PatternAutomaton;
use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::lines::{self, Line, LineFamily};
use log::debug;
use std::collections::HashSet;

/// Reading direction of a found word. The `Reverse` variants mean the word
/// was written against the family's scan direction; reported coordinates are
/// already swapped so walking start to end spells the word forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoundDirection {
    /// Left to right along a row.
    Horizontal,
    /// Right to left along a row.
    HorizontalReverse,
    /// Top to bottom along a column.
    Vertical,
    /// Bottom to top along a column.
    VerticalReverse,
    /// Down-right along a TL-BR diagonal.
    DiagonalTlBr,
    /// Up-left along a TL-BR diagonal.
    DiagonalBrTl,
    /// Down-left along a TR-BL diagonal.
    DiagonalTrBl,
    /// Up-right along a TR-BL diagonal.
    DiagonalBlTr,
}

impl FoundDirection {
    /// Direction tag for a match in `family`, forward or reverse.
    fn for_family(family: LineFamily, is_reverse: bool) -> Self {
        match (family, is_reverse) {
            (LineFamily::Rows, false) => FoundDirection::Horizontal,
            (LineFamily::Rows, true) => FoundDirection::HorizontalReverse,
            (LineFamily::Columns, false) => FoundDirection::Vertical,
            (LineFamily::Columns, true) => FoundDirection::VerticalReverse,
            (LineFamily::DiagonalTlBr, false) => FoundDirection::DiagonalTlBr,
            (LineFamily::DiagonalTlBr, true) => FoundDirection::DiagonalBrTl,
            (LineFamily::DiagonalTrBl, false) => FoundDirection::DiagonalTrBl,
            (LineFamily::DiagonalTrBl, true) => FoundDirection::DiagonalBlTr,
        }
    }

    /// Uppercase report label, e.g. `HORIZONTAL_REVERSE`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FoundDirection::Horizontal => "HORIZONTAL",
            FoundDirection::HorizontalReverse => "HORIZONTAL_REVERSE",
            FoundDirection::Vertical => "VERTICAL",
            FoundDirection::VerticalReverse => "VERTICAL_REVERSE",
            FoundDirection::DiagonalTlBr => "DIAGONAL_TL_BR",
            FoundDirection::DiagonalBrTl => "DIAGONAL_BR_TL",
            FoundDirection::DiagonalTrBl => "DIAGONAL_TR_BL",
            FoundDirection::DiagonalBlTr => "DIAGONAL_BL_TR",
        }
    }
}

/// One word occurrence in the grid.
///
/// Identity for deduplication is (word, start, end); the direction tag is
/// derived and carried for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundWord {
    /// Canonical (non-reversed) uppercase spelling.
    pub word: String,
    /// Row of the word's first letter, reading forward.
    pub start_row: usize,
    /// Column of the word's first letter, reading forward.
    pub start_col: usize,
    /// Row of the word's last letter.
    pub end_row: usize,
    /// Column of the word's last letter.
    pub end_col: usize,
    /// Forward reading direction.
    pub direction: FoundDirection,
}

impl FoundWord {
    /// Every cell from start to end inclusive, stepping by the unit
    /// direction `(sign(end_row - start_row), sign(end_col - start_col))`.
    /// This is the walk the rendering layer uses for highlighting.
    #[must_use]
    pub fn path(&self) -> Vec<(usize, usize)> {
        let step_row = signum(self.start_row, self.end_row);
        let step_col = signum(self.start_col, self.end_col);

        let mut cells = Vec::new();
        let (mut row, mut col) = (self.start_row as isize, self.start_col as isize);
        loop {
            cells.push((row as usize, col as usize));
            if (row as usize, col as usize) == (self.end_row, self.end_col) {
                break;
            }
            row += step_row;
            col += step_col;
        }
        cells
    }

    /// Dedup key: same word text at the same physical start/end is the same
    /// find, whichever pattern id surfaced it.
    fn key(&self) -> (String, usize, usize, usize, usize) {
        (
            self.word.clone(),
            self.start_row,
            self.start_col,
            self.end_row,
            self.end_col,
        )
    }
}

fn signum(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Finds every vocabulary word in the grid, in all 8 reading directions.
///
/// Builds the automaton from `words`, scans each line of the four families
/// exactly once, resolves the 1D matches to grid coordinates, and returns
/// the deduplicated finds in discovery order. An absent word is simply not
/// in the result; it is never an error.
///
/// # Errors
///
/// Returns a Configuration error for an empty vocabulary or a word with no
/// alphabetic characters (see [`PatternAutomaton::build`]).
pub fn solve<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Result<Vec<FoundWord>, PuzzleError> {
    let automaton = PatternAutomaton::build(words)?;

    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for family in LineFamily::ALL {
        let family_lines = lines::extract(grid, family);
        debug!(
            "scanning {} {family:?} lines of a {}x{} grid",
            family_lines.len(),
            grid.rows(),
            grid.cols()
        );
        for line in &family_lines {
            resolve_line(&automaton, line, family, &mut found, &mut seen);
        }
    }

    debug!("solve complete: {} unique placements", found.len());
    Ok(found)
}

/// Maps one line's raw matches to [`FoundWord`]s, deduplicating by value.
fn resolve_line(
    automaton: &PatternAutomaton,
    line: &Line,
    family: LineFamily,
    found: &mut Vec<FoundWord>,
    seen: &mut HashSet<(String, usize, usize, usize, usize)>,
) {
    for m in automaton.search(&line.chars) {
        let entry = automaton.pattern(m.pattern_id);
        let len = entry.text.chars().count();

        // Defensive boundary check; a well-formed match never trips this.
        if m.end + 1 < len || m.end >= line.coords.len() {
            continue;
        }
        let start_idx = m.end + 1 - len;

        let (start, end) = (line.coords[start_idx], line.coords[m.end]);
        // Reverse matches swap start/end so the tagged direction is the
        // forward reading direction, and report the canonical spelling.
        let (start, end) = if entry.is_reverse { (end, start) } else { (start, end) };

        let word = FoundWord {
            word: entry.canonical.clone(),
            start_row: start.0,
            start_col: start.1,
            end_row: end.0,
            end_col: end.1,
            direction: FoundDirection::for_family(family, entry.is_reverse),
        };

        // The same physical placement can surface through multiple pattern
        // ids (duplicate vocabulary words, palindromes); keep one.
        if seen.insert(word.key()) {
            found.push(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(found: &'a [FoundWord], word: &str) -> &'a FoundWord {
        found
            .iter()
            .find(|f| f.word == word)
            .unwrap_or_else(|| panic!("{word} not found in {found:?}"))
    }

    #[test]
    fn test_horizontal_forward() {
        let grid = Grid::from_rows(&["CATDOG", "XXXXXX"]).unwrap();
        let found = solve(&grid, &["CAT"]).unwrap();
        assert_eq!(found.len(), 1);
        let fw = &found[0];
        assert_eq!(fw.word, "CAT");
        assert_eq!((fw.start_row, fw.start_col), (0, 0));
        assert_eq!((fw.end_row, fw.end_col), (0, 2));
        assert_eq!(fw.direction, FoundDirection::Horizontal);
    }

    #[test]
    fn test_horizontal_reverse_swaps_coordinates() {
        let grid = Grid::from_rows(&["TAC"]).unwrap();
        let found = solve(&grid, &["CAT"]).unwrap();
        assert_eq!(found.len(), 1);
        let fw = &found[0];
        assert_eq!(fw.word, "CAT"); // canonical spelling, not "TAC"
        assert_eq!((fw.start_row, fw.start_col), (0, 2));
        assert_eq!((fw.end_row, fw.end_col), (0, 0));
        assert_eq!(fw.direction, FoundDirection::HorizontalReverse);
    }

    #[test]
    fn test_vertical_both_directions() {
        let grid = Grid::from_rows(&["CD", "AO", "TG"]).unwrap();
        let found = solve(&grid, &["cat", "god"]).unwrap();

        let cat = find(&found, "CAT");
        assert_eq!(cat.direction, FoundDirection::Vertical);
        assert_eq!((cat.start_row, cat.start_col), (0, 0));
        assert_eq!((cat.end_row, cat.end_col), (2, 0));

        let god = find(&found, "GOD");
        assert_eq!(god.direction, FoundDirection::VerticalReverse);
        assert_eq!((god.start_row, god.start_col), (2, 1));
        assert_eq!((god.end_row, god.end_col), (0, 1));
    }

    #[test]
    fn test_diagonal_tl_br() {
        let grid = Grid::from_rows(&["CXX", "XAX", "XXT"]).unwrap();
        let found = solve(&grid, &["cat"]).unwrap();
        let cat = find(&found, "CAT");
        assert_eq!(cat.direction, FoundDirection::DiagonalTlBr);
        assert_eq!((cat.start_row, cat.start_col), (0, 0));
        assert_eq!((cat.end_row, cat.end_col), (2, 2));
    }

    #[test]
    fn test_diagonal_reverse_reads_up_right() {
        // The TR-BL scan sees "TAC" from (0,2); the word CAT is actually
        // written up-right from (2,0), and that is what gets reported.
        let grid = Grid::from_rows(&["XXT", "XAX", "CXX"]).unwrap();
        let found = solve(&grid, &["cat"]).unwrap();
        let cat = find(&found, "CAT");
        assert_eq!(cat.direction, FoundDirection::DiagonalBlTr);
        assert_eq!((cat.start_row, cat.start_col), (2, 0));
        assert_eq!((cat.end_row, cat.end_col), (0, 2));
    }

    #[test]
    fn test_path_spells_word_forward() {
        let grid = Grid::from_rows(&["XXT", "XAX", "CXX"]).unwrap();
        let found = solve(&grid, &["cat"]).unwrap();
        let fw = find(&found, "CAT");

        let spelled: String = fw
            .path()
            .iter()
            .map(|&(r, c)| grid.get(r, c).unwrap())
            .collect();
        assert_eq!(spelled, "CAT");
    }

    #[test]
    fn test_absent_word_is_empty_result_not_error() {
        let grid = Grid::from_rows(&["AAAA", "AAAA"]).unwrap();
        let found = solve(&grid, &["zebra"]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_vocabulary_words_dedup_by_value() {
        let grid = Grid::from_rows(&["CAT"]).unwrap();
        let found = solve(&grid, &["cat", "cat"]).unwrap();
        // Two pattern ids, one physical placement.
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_palindrome_reported_in_both_directions() {
        let grid = Grid::from_rows(&["LEVEL"]).unwrap();
        let found = solve(&grid, &["level"]).unwrap();
        // Forward says (0,0)->(0,4); the reverse variant says the same cells
        // with start/end swapped. Both survive: their keys differ.
        assert_eq!(found.len(), 2);
        let dirs: HashSet<_> = found.iter().map(|f| f.direction).collect();
        assert!(dirs.contains(&FoundDirection::Horizontal));
        assert!(dirs.contains(&FoundDirection::HorizontalReverse));
    }

    #[test]
    fn test_multiple_occurrences_all_found() {
        let grid = Grid::from_rows(&["CATCAT"]).unwrap();
        let found = solve(&grid, &["cat"]).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let grid = Grid::from_rows(&["CATDOG", "AXOXXX", "TGXXXX"]).unwrap();
        let words = ["cat", "dog", "tag"];
        let a: HashSet<FoundWord> = solve(&grid, &words).unwrap().into_iter().collect();
        let b: HashSet<FoundWord> = solve(&grid, &words).unwrap().into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_vocabulary_is_configuration_error() {
        let grid = Grid::from_rows(&["ABC"]).unwrap();
        let words: [&str; 0] = [];
        let err = solve(&grid, &words).unwrap_err();
        assert_eq!(err.code(), "C001");
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(FoundDirection::Horizontal.label(), "HORIZONTAL");
        assert_eq!(
            FoundDirection::DiagonalBlTr.label(),
            "DIAGONAL_BL_TR"
        );
    }
}
