use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::time::Instant;

use wordgrid::errors::PuzzleError;
use wordgrid::generator::{self, GeneratorConfig, PlacementMode, DEFAULT_MAX_ATTEMPTS};
use wordgrid::report;
use wordgrid::solver;
use wordgrid::word_list::{self, WordList};

/// Word-search puzzle solver and generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find every vocabulary word in an existing puzzle grid
    Solve {
        /// Path to the word list file (one word per line)
        #[arg(short, long)]
        word_list: String,

        /// Path to the puzzle grid file (one row per line)
        #[arg(short, long)]
        grid: String,

        /// Optional path for an HTML report with found words highlighted
        #[arg(long)]
        html: Option<String>,
    },

    /// Generate a puzzle and its solution key from a word list
    Generate {
        /// Path to the word list file (one word per line)
        #[arg(short, long)]
        word_list: String,

        /// Grid height
        #[arg(short, long)]
        rows: usize,

        /// Grid width
        #[arg(short, long)]
        cols: usize,

        /// Output path for the solution grid (empty cells as spaces)
        #[arg(long)]
        solution: Option<String>,

        /// Output path for the puzzle grid (empty cells filled with random letters)
        #[arg(long)]
        puzzle: Option<String>,

        /// Require at least one shared-letter intersection between words
        #[arg(long)]
        force_intersection: bool,

        /// Use exhaustive backtracking search instead of bounded random attempts
        #[arg(long)]
        backtracking: bool,

        /// Attempts per word in randomized mode
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// RNG seed for reproducible output (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Entry point. Delegates to [`try_main`], printing errors in a
/// user-friendly way before exiting with a nonzero code.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Solve {
            word_list,
            grid,
            html,
        } => run_solve(&word_list, &grid, html.as_deref()),
        Command::Generate {
            word_list,
            rows,
            cols,
            solution,
            puzzle,
            force_intersection,
            backtracking,
            max_attempts,
            seed,
        } => {
            let config = GeneratorConfig {
                rows,
                cols,
                force_intersection,
                mode: if backtracking {
                    PlacementMode::Backtracking
                } else {
                    PlacementMode::Randomized { max_attempts }
                },
            };
            run_generate(&word_list, &config, solution.as_deref(), puzzle.as_deref(), seed)
        }
    }
}

/// Solve flow: load inputs, time the search (file I/O excluded), print the
/// findings, and optionally write the HTML report.
fn run_solve(
    word_list_path: &str,
    grid_path: &str,
    html_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = WordList::load_from_path(word_list_path)?;
    let grid = word_list::load_grid_from_path(grid_path)?;
    log::info!(
        "loaded {} words and a {}x{} grid",
        words.words.len(),
        grid.rows(),
        grid.cols()
    );

    let t_solve = Instant::now();
    let results = solver::solve(&grid, &words.words)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for found in &results {
        println!(
            "{} ({},{}) -> ({},{}) {}",
            found.word,
            found.start_row,
            found.start_col,
            found.end_row,
            found.end_col,
            found.direction.label()
        );
    }

    eprintln!("\n{}", report::found_summary(&words.words, &results));
    eprintln!(
        "Found {} placement(s) in {:.3}ms.",
        results.len(),
        solve_secs * 1000.0
    );

    if let Some(path) = html_path {
        std::fs::write(path, report::html_report(&grid, &results))?;
        eprintln!("HTML report written to {path}");
    }

    Ok(())
}

/// Generate flow: load the vocabulary, place it, report unplaced words, and
/// write/print the solution and puzzle views.
fn run_generate(
    word_list_path: &str,
    config: &GeneratorConfig,
    solution_path: Option<&str>,
    puzzle_path: Option<&str>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = WordList::load_from_path(word_list_path)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let t_generate = Instant::now();
    let generated = generator::generate(&words.words, config, &mut rng)?;
    let generate_secs = t_generate.elapsed().as_secs_f64();

    for word in &generated.unplaced {
        eprintln!("⚠️  could not place: {word}");
    }
    eprintln!(
        "Placed {}/{} words in {:.3}ms.",
        generated.placed.len(),
        words.words.len(),
        generate_secs * 1000.0
    );

    match solution_path {
        Some(path) => {
            std::fs::write(path, generated.solution.solution_text())?;
            eprintln!("Solution written to {path}");
        }
        None => println!("{}", generated.solution.solution_text()),
    }
    match puzzle_path {
        Some(path) => {
            std::fs::write(path, generated.puzzle.puzzle_text())?;
            eprintln!("Puzzle written to {path}");
        }
        None => println!("{}", generated.puzzle.puzzle_text()),
    }

    Ok(())
}
