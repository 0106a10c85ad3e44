//! Command implementations

pub mod build;
pub mod evaluate;
pub mod solve;

pub use build::{BuildReport, build_tree, survey};
pub use evaluate::{EvaluateStats, run_evaluate};
pub use solve::{GUESS_LIMIT, ProbeStep, SolveResult, solve_word};
