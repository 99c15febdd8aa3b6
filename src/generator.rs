//! The puzzle generator: places the vocabulary into an empty grid under
//! non-conflicting overlap rules, then fills leftover cells with random
//! letters.
//!
//! Candidate placements range over 8 direction vectors x 2 orientations
//! (forward/backward) x all anchor cells. A candidate is valid only if every
//! cell it would occupy is empty or already holds the exact required letter,
//! so no placement ever silently overwrites another.
//!
//! Two search modes:
//!
//! - **Randomized**: per word, sample random (direction, orientation,
//!   anchor) up to a bounded attempt count and accept the first conflict-free
//!   candidate. No undo; unplaceable words are reported individually while
//!   the rest proceed.
//! - **Backtracking**: treat the word sequence as a constraint-satisfaction
//!   search over an explicit stack of choice points. A word that cannot be
//!   placed undoes the previous word's placement (erasing only cells no
//!   earlier placement owns) and resumes that word at its next untried
//!   candidate. Succeeds only with every word placed; otherwise the whole
//!   batch fails as Infeasible. Worst-case exponential; bounding the work is
//!   the caller's job.
//!
//! The RNG is passed in explicitly and seedable, so generation is
//! reproducible under test.
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordgrid::generator::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(10, 10);
//! let mut rng = StdRng::seed_from_u64(1);
//! let puzzle = generate(&["rust", "cargo", "crate"], &config, &mut rng)?;
//!
//! assert!(puzzle.unplaced.is_empty());
//! assert_eq!(puzzle.puzzle.empty_count(), 0);
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```

use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::grid_char::GridChar;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// The 8 unit direction vectors (row step, column step).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Default attempt cap per word in randomized mode.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Search strategy for placing words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Sample random candidates per word, up to the attempt cap; words that
    /// never fit are skipped and reported.
    Randomized {
        /// Attempts per word before giving up on it.
        max_attempts: usize,
    },
    /// Exhaustive search with undo; all-or-nothing over the whole batch.
    Backtracking,
}

/// Generation parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Prefer candidates sharing a letter-cell with an already-placed word
    /// until at least one such intersection exists.
    pub force_intersection: bool,
    /// Search strategy.
    pub mode: PlacementMode,
}

impl GeneratorConfig {
    /// Randomized-mode config with the default attempt cap and no forced
    /// intersection.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            force_intersection: false,
            mode: PlacementMode::Randomized {
                max_attempts: DEFAULT_MAX_ATTEMPTS,
            },
        }
    }
}

/// A committed word placement: anchor cell, direction vector, orientation.
///
/// `forward == false` means the word's letters were written along the
/// direction vector last-letter-first; `cell(i)` always returns the cell of
/// the word's `i`-th letter either way, which is what undo and
/// intersection-candidate enumeration need.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    /// Uppercase word text.
    pub word: String,
    /// Anchor row (the cell written first).
    pub start_row: usize,
    /// Anchor column.
    pub start_col: usize,
    /// Row step per letter slot.
    pub d_row: isize,
    /// Column step per letter slot.
    pub d_col: isize,
    /// Orientation along the direction vector.
    pub forward: bool,
}

impl PlacedWord {
    /// Grid cell of the word's `i`-th letter (0-based).
    #[must_use]
    pub fn cell(&self, i: usize) -> (usize, usize) {
        let len = self.word.chars().count();
        let step = if self.forward { i } else { len - 1 - i } as isize;
        let row = self.start_row as isize + self.d_row * step;
        let col = self.start_col as isize + self.d_col * step;
        (row as usize, col as usize)
    }

    /// All cells of this word, in letter order.
    #[must_use]
    pub fn path(&self) -> Vec<(usize, usize)> {
        (0..self.word.chars().count()).map(|i| self.cell(i)).collect()
    }
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The full puzzle: every cell holds a letter.
    pub puzzle: Grid,
    /// The solution view: placed letters only, empty cells blank.
    pub solution: Grid,
    /// Every committed placement, in placement order.
    pub placed: Vec<PlacedWord>,
    /// Words that could not be placed (randomized mode only; backtracking
    /// either places everything or errors).
    pub unplaced: Vec<String>,
}

/// One candidate placement, not yet validated against the grid.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start_row: isize,
    start_col: isize,
    d_row: isize,
    d_col: isize,
    forward: bool,
}

/// Generates a puzzle from `words` according to `config`.
///
/// Words are normalized to uppercase with non-letters dropped and processed
/// in input order. After placement, a snapshot of the grid becomes the
/// solution view and the remaining empty cells are filled with random
/// letters.
///
/// # Errors
///
/// Configuration errors for bad dimensions or vocabulary; in backtracking
/// mode additionally [`PuzzleError::Unplaceable`] (class Infeasible) when
/// the search space is exhausted.
pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedPuzzle, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyVocabulary);
    }
    let mut grid = Grid::empty(config.rows, config.cols)?;

    let mut normalized = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        let upper: String = word
            .chars()
            .filter(|c| c.is_grid_letter())
            .map(|c| c.to_grid_letter())
            .collect();
        if upper.is_empty() {
            return Err(PuzzleError::NoAlphabeticChars {
                word: word.to_string(),
            });
        }
        normalized.push(upper);
    }

    let (placed, unplaced) = match config.mode {
        PlacementMode::Randomized { max_attempts } => {
            place_randomized(&normalized, &mut grid, config, max_attempts, rng)
        }
        PlacementMode::Backtracking => place_backtracking(&normalized, &mut grid, config, rng)?,
    };

    let solution = grid.clone();
    grid.fill_empty(rng);

    Ok(GeneratedPuzzle {
        puzzle: grid,
        solution,
        placed,
        unplaced,
    })
}

/// Checks that every cell of `candidate` is in bounds and empty or already
/// holding the needed letter. Returns the occupied cells (`written=false`)
/// and whether any existing letter is shared (an intersection).
fn validate(grid: &Grid, word: &str, candidate: &Candidate) -> Option<(Vec<(usize, usize)>, bool)> {
    let len = word.chars().count() as isize;
    let end_row = candidate.start_row + candidate.d_row * (len - 1);
    let end_col = candidate.start_col + candidate.d_col * (len - 1);

    let in_bounds = |r: isize, c: isize| {
        r >= 0 && (r as usize) < grid.rows() && c >= 0 && (c as usize) < grid.cols()
    };
    if !in_bounds(candidate.start_row, candidate.start_col) || !in_bounds(end_row, end_col) {
        return None;
    }

    let mut cells = Vec::with_capacity(len as usize);
    let mut intersects = false;
    for (i, letter) in word.chars().enumerate() {
        let step = if candidate.forward {
            i as isize
        } else {
            len - 1 - i as isize
        };
        let row = (candidate.start_row + candidate.d_row * step) as usize;
        let col = (candidate.start_col + candidate.d_col * step) as usize;
        match grid.get(row, col) {
            None => {}
            Some(existing) if existing == letter => intersects = true,
            Some(_) => return None,
        }
        cells.push((row, col));
    }
    Some((cells, intersects))
}

/// Writes a validated candidate into the grid, returning the committed
/// placement and the cells that were previously empty (for undo).
fn commit(
    grid: &mut Grid,
    word: &str,
    candidate: &Candidate,
) -> (PlacedWord, Vec<(usize, usize)>) {
    let placed = PlacedWord {
        word: word.to_string(),
        start_row: candidate.start_row as usize,
        start_col: candidate.start_col as usize,
        d_row: candidate.d_row,
        d_col: candidate.d_col,
        forward: candidate.forward,
    };

    let mut newly_written = Vec::new();
    for (i, letter) in word.chars().enumerate() {
        let (row, col) = placed.cell(i);
        if grid.get(row, col).is_none() {
            newly_written.push((row, col));
        }
        grid.set(row, col, letter);
    }
    (placed, newly_written)
}

/// Randomized placement: independent placement attempts per word plus the optional
/// intersection-first pass.
fn place_randomized<R: Rng + ?Sized>(
    words: &[String],
    grid: &mut Grid,
    config: &GeneratorConfig,
    max_attempts: usize,
    rng: &mut R,
) -> (Vec<PlacedWord>, Vec<String>) {
    let mut placed_words: Vec<PlacedWord> = Vec::new();
    let mut unplaced = Vec::new();
    let mut has_intersection = false;

    for word in words {
        let mut placed = false;

        // Intersection-first pass: only until one intersection exists.
        if config.force_intersection && !has_intersection && !placed_words.is_empty() {
            if let Some(p) = try_place_intersecting(word, grid, &placed_words, rng) {
                debug!("placed {word} intersecting an earlier word");
                placed_words.push(p);
                has_intersection = true;
                placed = true;
            }
        }

        let mut attempts = 0;
        while !placed && attempts < max_attempts {
            let (d_row, d_col) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            let candidate = Candidate {
                start_row: rng.random_range(0..grid.rows()) as isize,
                start_col: rng.random_range(0..grid.cols()) as isize,
                d_row,
                d_col,
                forward: rng.random(),
            };

            if let Some((_, intersects)) = validate(grid, word, &candidate) {
                let (p, _) = commit(grid, word, &candidate);
                placed_words.push(p);
                has_intersection |= intersects;
                placed = true;
            }
            attempts += 1;
        }

        if !placed {
            warn!("could not place word: {word}");
            unplaced.push(word.clone());
        }
    }

    (placed_words, unplaced)
}

/// Tries to place `word` so it shares a letter-cell with an earlier word.
///
/// Enumerates every (letter of `word`, matching letter-cell of a placed
/// word) pair, shuffles them, and for each tries all 8 directions x 2
/// orientations with the anchor back-solved so the shared cell lines up.
fn try_place_intersecting<R: Rng + ?Sized>(
    word: &str,
    grid: &mut Grid,
    placed_words: &[PlacedWord],
    rng: &mut R,
) -> Option<PlacedWord> {
    // (cell, index of the letter of `word` that must land on it)
    let mut points: Vec<((usize, usize), usize)> = Vec::new();
    let letters: Vec<char> = word.chars().collect();

    for placed in placed_words {
        for (j, pc) in placed.word.chars().enumerate() {
            for (i, &wc) in letters.iter().enumerate() {
                if wc == pc {
                    points.push((placed.cell(j), i));
                }
            }
        }
    }
    points.shuffle(rng);

    let len = letters.len() as isize;
    for ((row, col), letter_idx) in points {
        for (d_row, d_col) in DIRECTIONS {
            for forward in [true, false] {
                let step = if forward {
                    letter_idx as isize
                } else {
                    len - 1 - letter_idx as isize
                };
                let candidate = Candidate {
                    start_row: row as isize - d_row * step,
                    start_col: col as isize - d_col * step,
                    d_row,
                    d_col,
                    forward,
                };
                if validate(grid, word, &candidate).is_some() {
                    let (p, _) = commit(grid, word, &candidate);
                    return Some(p);
                }
            }
        }
    }
    None
}

/// One choice point in the backtracking search: a word, its shuffled
/// candidate list, a cursor into it, and the undo record of the currently
/// applied candidate.
struct Frame {
    candidates: Vec<Candidate>,
    next: usize,
    applied: Option<Applied>,
}

struct Applied {
    placed: PlacedWord,
    /// Cells this placement wrote that were empty before; the only cells
    /// undo may erase, since overlapped cells belong to earlier placements.
    newly_written: Vec<(usize, usize)>,
    intersected: bool,
}

/// All candidates for one word, intersecting candidates first when an
/// intersection is still owed, randomly ordered within each group.
fn build_candidates<R: Rng + ?Sized>(
    word: &str,
    grid: &Grid,
    need_intersection: bool,
    rng: &mut R,
) -> Vec<Candidate> {
    let mut preferred = Vec::new();
    let mut rest = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            for (d_row, d_col) in DIRECTIONS {
                for forward in [true, false] {
                    let candidate = Candidate {
                        start_row: row as isize,
                        start_col: col as isize,
                        d_row,
                        d_col,
                        forward,
                    };
                    match validate(grid, word, &candidate) {
                        Some((_, true)) if need_intersection => preferred.push(candidate),
                        Some(_) => rest.push(candidate),
                        None => {}
                    }
                }
            }
        }
    }

    preferred.shuffle(rng);
    rest.shuffle(rng);
    preferred.extend(rest);
    preferred
}

/// Backtracking placement over an explicit stack of choice points.
///
/// Invariant: `stack[i]` is the committed frame for `words[i]`; `frame` is
/// the in-progress choice point for `words[stack.len()]`. Undoing a frame
/// restores the grid to exactly the state its candidate list was built
/// against, so resuming at the next cursor position is sound.
fn place_backtracking<R: Rng + ?Sized>(
    words: &[String],
    grid: &mut Grid,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(Vec<PlacedWord>, Vec<String>), PuzzleError> {
    let mut stack: Vec<Frame> = Vec::with_capacity(words.len());

    let need_intersection = |stack: &[Frame], word_idx: usize| {
        config.force_intersection
            && word_idx > 0
            && !stack
                .iter()
                .any(|f| f.applied.as_ref().is_some_and(|a| a.intersected))
    };

    let mut frame = Frame {
        candidates: build_candidates(&words[0], grid, false, rng),
        next: 0,
        applied: None,
    };

    loop {
        let word = &words[stack.len()];

        // Advance this frame's cursor to its next workable candidate.
        let mut advanced = false;
        while frame.next < frame.candidates.len() {
            let candidate = frame.candidates[frame.next];
            frame.next += 1;
            if let Some((_, intersects)) = validate(grid, word, &candidate) {
                let (placed, newly_written) = commit(grid, word, &candidate);
                frame.applied = Some(Applied {
                    placed,
                    newly_written,
                    intersected: intersects,
                });
                advanced = true;
                break;
            }
        }

        if advanced {
            stack.push(frame);
            if stack.len() == words.len() {
                break;
            }
            let word_idx = stack.len();
            frame = Frame {
                candidates: build_candidates(
                    &words[word_idx],
                    grid,
                    need_intersection(&stack, word_idx),
                    rng,
                ),
                next: 0,
                applied: None,
            };
            continue;
        }

        // Dead end: undo the previous word's placement, erasing only cells
        // no earlier placement owns, and retry it at its next candidate.
        let Some(mut prev) = stack.pop() else {
            debug!("backtracking search space exhausted");
            return Err(PuzzleError::Unplaceable {
                word_count: words.len(),
                rows: config.rows,
                cols: config.cols,
            });
        };
        if let Some(applied) = prev.applied.take() {
            for (row, col) in applied.newly_written {
                grid.clear(row, col);
            }
        }
        frame = prev;
    }

    let placed = stack
        .into_iter()
        .filter_map(|f| f.applied.map(|a| a.placed))
        .collect();
    Ok((placed, Vec::new()))
}
