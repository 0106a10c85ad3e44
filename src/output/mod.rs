//! Terminal output formatting

mod display;
pub mod formatters;
mod printer;

pub use display::{print_build_report, print_evaluate_stats, print_solve_result};
pub use printer::TreePrinter;
