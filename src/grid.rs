//! The letter grid shared by the solver and the generator.
//!
//! A [`Grid`] is a rows x cols matrix of cells that are either a letter or
//! explicitly empty. During generation the placement engine write-owns the
//! grid; during solving it is read-only. There is no interior mutability;
//! whichever phase holds `&mut Grid` is the only writer.

use crate::errors::PuzzleError;
use crate::grid_char::{random_letter, GridChar};
use rand::Rng;
use std::fmt;

/// Rectangular letter matrix with an explicit "empty" sentinel per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major; `None` marks a cell no placement has claimed yet.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidDimensions`] if either dimension is zero.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Parses a grid from equal-length text rows, uppercasing every cell.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyGrid`] for zero rows or an empty first
    /// row, and [`PuzzleError::RaggedGrid`] as soon as a row's length
    /// differs from the first row's; it never proceeds with ragged data.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, PuzzleError> {
        if lines.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }

        let cols = lines[0].as_ref().chars().count();
        if cols == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(PuzzleError::RaggedGrid {
                    row,
                    expected: cols,
                    found,
                });
            }
            cells.extend(line.chars().map(|c| Some(c.to_grid_letter())));
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The letter at (row, col), or `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds; callers iterate within
    /// `rows()`/`cols()`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Writes a letter into a cell.
    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col] = Some(letter);
    }

    /// Resets a cell to empty (used when a placement is undone).
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col] = None;
    }

    /// Fills every remaining empty cell with a uniformly random uppercase
    /// letter. Purely cosmetic; fill letters are never checked against
    /// placement constraints.
    pub fn fill_empty<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(random_letter(rng));
            }
        }
    }

    /// Count of cells still empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Renders the grid with empty cells as spaces (the solution-file view).
    #[must_use]
    pub fn solution_text(&self) -> String {
        self.render(' ')
    }

    /// Renders the grid with empty cells as `?`. Generation fills the grid
    /// before rendering the puzzle, so the placeholder only shows up if a
    /// caller skips [`fill_empty`](Self::fill_empty).
    #[must_use]
    pub fn puzzle_text(&self) -> String {
        self.render('?')
    }

    fn render(&self, empty: char) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.get(row, col).unwrap_or(empty));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.solution_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_grid_dimensions() {
        let grid = Grid::empty(3, 5).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.empty_count(), 15);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Grid::empty(0, 10),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::empty(10, 0),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_rows_uppercases() {
        let grid = Grid::from_rows(&["cat", "dog"]).unwrap();
        assert_eq!(grid.get(0, 0), Some('C'));
        assert_eq!(grid.get(1, 2), Some('G'));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(&["ABCDE", "ABCD"]).unwrap_err();
        match err {
            PuzzleError::RaggedGrid {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 5);
                assert_eq!(found, 4);
            }
            other => panic!("expected RaggedGrid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let lines: [&str; 0] = [];
        assert!(matches!(Grid::from_rows(&lines), Err(PuzzleError::EmptyGrid)));
        assert!(matches!(Grid::from_rows(&[""]), Err(PuzzleError::EmptyGrid)));
    }

    #[test]
    fn test_set_clear_roundtrip() {
        let mut grid = Grid::empty(2, 2).unwrap();
        grid.set(1, 0, 'Q');
        assert_eq!(grid.get(1, 0), Some('Q'));
        grid.clear(1, 0);
        assert_eq!(grid.get(1, 0), None);
    }

    #[test]
    fn test_fill_empty_fills_everything() {
        let mut grid = Grid::empty(4, 4).unwrap();
        grid.set(0, 0, 'A');
        let mut rng = StdRng::seed_from_u64(42);
        grid.fill_empty(&mut rng);
        assert_eq!(grid.empty_count(), 0);
        // Pre-placed letters survive the fill.
        assert_eq!(grid.get(0, 0), Some('A'));
    }

    #[test]
    fn test_fill_empty_is_reproducible() {
        let mut a = Grid::empty(5, 5).unwrap();
        let mut b = Grid::empty(5, 5).unwrap();
        a.fill_empty(&mut StdRng::seed_from_u64(9));
        b.fill_empty(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_solution_text_uses_spaces() {
        let mut grid = Grid::empty(1, 3).unwrap();
        grid.set(0, 1, 'X');
        assert_eq!(grid.solution_text(), " X \n");
        assert_eq!(grid.puzzle_text(), "?X?\n");
    }
}
