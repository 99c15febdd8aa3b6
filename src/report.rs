//! Rendering of solve results: console summary and HTML highlighted table.
//!
//! Highlighting a [`FoundWord`] walks from its start to its end cell
//! inclusive, stepping by `(sign(end_row - start_row), sign(end_col -
//! start_col))`; the rendering contract depends on exactly the coordinate
//! and direction semantics the solver reports.

use crate::grid::Grid;
use crate::solver::FoundWord;
use std::fmt::Write;

/// Builds the HTML results page: a monospace letter table with every cell
/// belonging to a found word highlighted.
#[must_use]
pub fn html_report(grid: &Grid, results: &[FoundWord]) -> String {
    let rows = grid.rows();
    let cols = grid.cols();

    let mut highlighted = vec![vec![false; cols]; rows];
    for found in results {
        for (row, col) in found.path() {
            highlighted[row][col] = true;
        }
    }

    // ~60 bytes per cell is a comfortable overestimate.
    let mut html = String::with_capacity(rows * cols * 60);
    html.push_str("<!DOCTYPE html>");
    html.push_str("<html><head><meta charset=\"utf-8\"><title>Word Search</title>");
    html.push_str(
        "<style>table{border-collapse:collapse}\
         td{width:28px;height:28px;text-align:center;border:1px solid #000;\
         font-family:monospace;font-weight:bold}.h{background:#ffeb3b}</style>",
    );
    html.push_str("</head><body>");
    html.push_str("<h1 style=\"font-family:monospace\">Word Search Results</h1>");
    html.push_str("<table>");

    for row in 0..rows {
        html.push_str("<tr>");
        for col in 0..cols {
            let letter = grid.get(row, col).unwrap_or(' ');
            if highlighted[row][col] {
                let _ = write!(html, "<td class=\"h\">{letter}</td>");
            } else {
                let _ = write!(html, "<td>{letter}</td>");
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");

    // Found-word listing below the table.
    html.push_str("<table><tr><th>Word</th><th>Start</th><th>End</th><th>Direction</th></tr>");
    for found in results {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>({},{})</td><td>({},{})</td><td>{}</td></tr>",
            found.word,
            found.start_row,
            found.start_col,
            found.end_row,
            found.end_col,
            found.direction.label()
        );
    }
    html.push_str("</table>");
    html.push_str("</body></html>");
    html
}

/// Per-vocabulary-word FOUND / NOT FOUND summary lines, in input order.
#[must_use]
pub fn found_summary<S: AsRef<str>>(words: &[S], results: &[FoundWord]) -> String {
    let mut out = String::new();
    for word in words {
        let upper = word.as_ref().to_uppercase();
        let count = results.iter().filter(|f| f.word == upper).count();
        let status = if count > 0 { "✓ FOUND" } else { "✗ NOT FOUND" };
        let _ = writeln!(out, "  {upper:<15} {status}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_html_highlights_found_cells() {
        let grid = Grid::from_rows(&["CATX", "XXXX"]).unwrap();
        let results = solve(&grid, &["cat"]).unwrap();
        let html = html_report(&grid, &results);

        // Three highlighted cells for C, A, T; the X cells stay plain.
        assert_eq!(html.matches("<td class=\"h\">").count(), 3);
        assert!(html.contains("<td class=\"h\">C</td>"));
        assert!(html.contains("<td>X</td>"));
        assert!(html.contains("HORIZONTAL"));
    }

    #[test]
    fn test_html_reverse_walk_covers_same_cells() {
        // Reverse finds walk end-to-start via the sign step; the highlight
        // set must be identical to the forward case.
        let grid = Grid::from_rows(&["TAC"]).unwrap();
        let results = solve(&grid, &["cat"]).unwrap();
        let html = html_report(&grid, &results);
        assert_eq!(html.matches("<td class=\"h\">").count(), 3);
    }

    #[test]
    fn test_summary_marks_missing_words() {
        let grid = Grid::from_rows(&["CAT"]).unwrap();
        let results = solve(&grid, &["cat", "dog"]).unwrap();
        let summary = found_summary(&["cat", "dog"], &results);

        assert!(summary.contains("CAT"));
        assert!(summary.contains("✓ FOUND"));
        assert!(summary.contains("DOG"));
        assert!(summary.contains("✗ NOT FOUND"));
    }
}
