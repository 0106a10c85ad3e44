//! probetree - CLI
//!
//! Builds decision-tree strategies for the guess-the-word game and plays
//! them against their own vocabulary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use probetree::{
    commands::{build_tree, run_evaluate, solve_word},
    output::{TreePrinter, print_build_report, print_evaluate_stats, print_solve_result},
    tree::{RandomProbe, SilentObserver, TreeConfig},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "probetree",
    about = "Decision-tree strategy builder for word-guessing games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist file (one word per line); omit for the embedded demo list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for the random probe selector, for reproducible builds
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Stop splitting at or below this candidate count
    #[arg(long, global = true, default_value = "1")]
    min_leaf_size: usize,

    /// Never split at or beyond this depth
    #[arg(long, global = true, default_value = "15")]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree and print its structural summary (default)
    Build {
        /// Draw the tree while it is built
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate solving a specific secret word
    Solve {
        /// The secret word to solve for
        word: String,

        /// Show candidate counts after every probe
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every vocabulary word and report statistics
    Evaluate {
        /// Limit the run to the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_deref())?;
    // min_leaf_size below 1 would never terminate on duplicate words
    let config = TreeConfig::new(cli.min_leaf_size.max(1), cli.max_depth);
    let mut selector = cli.seed.map_or_else(RandomProbe::new, RandomProbe::seeded);

    let command = cli.command.unwrap_or(Commands::Build { verbose: false });

    match command {
        Commands::Build { verbose } => {
            let (_, report) = if verbose {
                build_tree(words, &config, &mut selector, &mut TreePrinter::new())
            } else {
                build_tree(words, &config, &mut selector, &mut SilentObserver)
            };
            print_build_report(&report);
        }
        Commands::Solve { word, verbose } => {
            let (tree, _) = build_tree(words, &config, &mut selector, &mut SilentObserver);
            let result = solve_word(&tree, &word.trim().to_lowercase());
            print_solve_result(&result, verbose);
        }
        Commands::Evaluate { limit } => {
            let (tree, report) = build_tree(words, &config, &mut selector, &mut SilentObserver);
            print_build_report(&report);
            let stats = run_evaluate(&tree, limit, true);
            print_evaluate_stats(&stats);
        }
    }

    Ok(())
}

/// Load the vocabulary from the `-w` flag or fall back to the embedded list
fn load_words(wordlist: Option<&str>) -> Result<Vec<String>> {
    match wordlist {
        None => Ok(words_from_slice(WORDS)),
        Some(path) => Ok(load_from_file(path)?),
    }
}
