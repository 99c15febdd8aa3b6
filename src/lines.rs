//! Decomposes a grid into 1D scan lines with coordinate maps back to cells.
//!
//! The solver scans four line families: rows, columns, top-left-to-
//! bottom-right diagonals, and top-right-to-bottom-left diagonals. Every
//! line carries the list of cells that produced it, so a 1D match offset
//! maps straight back to a 2D coordinate.
//!
//! For a non-square R x C grid each diagonal family has exactly R + C - 1
//! lines covering every cell once: one sweep along a fixed border plus a
//! sweep along the perpendicular border that skips the shared corner.

use crate::grid::Grid;

/// One maximal straight line through the grid.
#[derive(Debug, Clone)]
pub struct Line {
    /// The line's characters in scan order; empty cells render as `' '`,
    /// which the automaton treats as a cursor reset.
    pub chars: String,
    /// `coords[i]` is the (row, col) cell producing `chars[i]`.
    pub coords: Vec<(usize, usize)>,
}

impl Line {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: String::with_capacity(capacity),
            coords: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, grid: &Grid, row: usize, col: usize) {
        self.chars.push(grid.get(row, col).unwrap_or(' '));
        self.coords.push((row, col));
    }
}

/// The four scan-line families of a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFamily {
    /// Left-to-right rows.
    Rows,
    /// Top-to-bottom columns.
    Columns,
    /// Diagonals stepping (+1, +1), read from the top-left.
    DiagonalTlBr,
    /// Diagonals stepping (+1, -1), read from the top-right.
    DiagonalTrBl,
}

impl LineFamily {
    /// All four families in scan order.
    pub const ALL: [LineFamily; 4] = [
        LineFamily::Rows,
        LineFamily::Columns,
        LineFamily::DiagonalTlBr,
        LineFamily::DiagonalTrBl,
    ];
}

/// Extracts every line of `family` from `grid`.
#[must_use]
pub fn extract(grid: &Grid, family: LineFamily) -> Vec<Line> {
    match family {
        LineFamily::Rows => rows(grid),
        LineFamily::Columns => columns(grid),
        LineFamily::DiagonalTlBr => diagonals_tl_br(grid),
        LineFamily::DiagonalTrBl => diagonals_tr_bl(grid),
    }
}

fn rows(grid: &Grid) -> Vec<Line> {
    (0..grid.rows())
        .map(|row| {
            let mut line = Line::with_capacity(grid.cols());
            for col in 0..grid.cols() {
                line.push(grid, row, col);
            }
            line
        })
        .collect()
}

fn columns(grid: &Grid) -> Vec<Line> {
    (0..grid.cols())
        .map(|col| {
            let mut line = Line::with_capacity(grid.rows());
            for row in 0..grid.rows() {
                line.push(grid, row, col);
            }
            line
        })
        .collect()
}

/// Walks one diagonal from (row, col), stepping by (+1, `col_step`).
fn walk_diagonal(grid: &Grid, mut row: usize, start_col: usize, col_step: isize) -> Line {
    let mut line = Line::with_capacity(grid.rows().min(grid.cols()));
    let mut col = start_col as isize;
    while row < grid.rows() && col >= 0 && (col as usize) < grid.cols() {
        line.push(grid, row, col as usize);
        row += 1;
        col += col_step;
    }
    line
}

fn diagonals_tl_br(grid: &Grid) -> Vec<Line> {
    let mut lines = Vec::with_capacity(grid.rows() + grid.cols() - 1);
    // Anchored on the first column: (0,0), (1,0), ..., (R-1,0).
    for start_row in 0..grid.rows() {
        lines.push(walk_diagonal(grid, start_row, 0, 1));
    }
    // Anchored on the first row, skipping the (0,0) corner already covered.
    for start_col in 1..grid.cols() {
        lines.push(walk_diagonal(grid, 0, start_col, 1));
    }
    lines
}

fn diagonals_tr_bl(grid: &Grid) -> Vec<Line> {
    let mut lines = Vec::with_capacity(grid.rows() + grid.cols() - 1);
    // Anchored on the last column: (0,C-1), (1,C-1), ..., (R-1,C-1).
    for start_row in 0..grid.rows() {
        lines.push(walk_diagonal(grid, start_row, grid.cols() - 1, -1));
    }
    // Anchored on the first row, skipping the (0,C-1) corner already covered.
    for start_col in (0..grid.cols().saturating_sub(1)).rev() {
        lines.push(walk_diagonal(grid, 0, start_col, -1));
    }
    lines
}
