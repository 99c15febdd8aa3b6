// Reusable library API; the CLI is a thin front-end over these modules
pub mod automaton;
pub mod errors;
pub mod generator;
pub mod grid;
mod grid_char;
pub mod lines;
pub mod log;
pub mod report;
pub mod solver;
pub mod word_list;
