//! Decision-tree strategies for interactive word-guessing games
//!
//! Given a vocabulary, [`fit`] builds a tree that recursively partitions
//! the candidate words by the feedback pattern each probe elicits;
//! [`predict`] walks a fitted tree with the feedback actually observed in
//! a game and returns the surviving candidates as guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use probetree::core::Pattern;
//!
//! let words: Vec<String> = ["cat", "car", "bar", "bat"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! // Build a strategy, then answer its probes with observed feedback
//! let strategy = probetree::fit(words, false);
//! let guesses = probetree::predict(&strategy, vec![Pattern::reveal("cat", "")]);
//! assert!(guesses.contains(&"cat"));
//! ```

// Core domain types
pub mod core;

// Strategy tree construction and traversal
pub mod tree;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

use crate::core::Pattern;
use crate::output::TreePrinter;
use crate::tree::{RandomProbe, SilentObserver, StrategyTree, TreeConfig};

/// Build a strategy tree over `words` with the default configuration
///
/// Uses the uninformed random probe selector; `verbose` draws the build
/// progress as a tree and affects no returned data. For seeded selectors,
/// custom thresholds, or custom observers use [`StrategyTree::fit`]
/// directly.
#[must_use]
pub fn fit(words: Vec<String>, verbose: bool) -> StrategyTree {
    let config = TreeConfig::default();
    let mut selector = RandomProbe::new();

    if verbose {
        StrategyTree::fit(words, &config, &mut selector, &mut TreePrinter::new())
    } else {
        StrategyTree::fit(words, &config, &mut selector, &mut SilentObserver)
    }
}

/// Walk a fitted strategy with a stream of observed feedback patterns
///
/// Returns the reached node's candidate words in vocabulary order.
/// Equivalent to [`StrategyTree::predict`].
pub fn predict<'a, I>(strategy: &'a StrategyTree, feedback: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = Pattern>,
{
    strategy.predict(feedback)
}
