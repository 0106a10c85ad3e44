//! Game simulation for a single secret word
//!
//! Plays one round against a fitted tree: descend from the root answering
//! each probe with the oracle's feedback for the secret, then spend the
//! guess budget on the reached leaf's candidates.

use crate::core::Pattern;
use crate::tree::{Descent, StrategyTree};

/// Game rule: only this many guesses from a leaf count
///
/// Truncation happens here, at the consumer — leaves keep their full
/// candidate sets.
pub const GUESS_LIMIT: usize = 5;

/// One probe/response exchange during a game
#[derive(Debug, Clone)]
pub struct ProbeStep {
    /// The probe word asked; empty for the root's length question
    pub probe: String,
    pub response: Pattern,
    pub candidates_after: usize,
}

/// Outcome of one simulated game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: String,
    pub steps: Vec<ProbeStep>,
    pub guesses: Vec<String>,
    pub success: bool,
    /// Child lookups that fell back to an unregistered pattern's sibling
    pub degraded_lookups: usize,
}

/// Simulate solving `secret` with a fitted tree
///
/// The secret need not belong to the tree's vocabulary; out-of-vocabulary
/// secrets simply degrade at the first unknown feedback pattern and lose.
#[must_use]
pub fn solve_word(tree: &StrategyTree, secret: &str) -> SolveResult {
    let mut node = tree.root();
    let mut steps = Vec::new();
    let mut degraded_lookups = 0;

    while !node.is_leaf() {
        let probe = tree.probe_word(node.probe());
        let response = Pattern::reveal(secret, probe);

        node = match node.get_child(&response) {
            Descent::Matched(child) => child,
            Descent::Degraded(child) => {
                degraded_lookups += 1;
                child
            }
            Descent::SelfLoop => break,
        };

        steps.push(ProbeStep {
            probe: probe.to_string(),
            response,
            candidates_after: node.candidates().len(),
        });
    }

    let guesses: Vec<String> = node
        .candidates()
        .iter()
        .take(GUESS_LIMIT)
        .map(|&i| tree.words()[i].clone())
        .collect();
    let success = guesses.iter().any(|g| g == secret);

    SolveResult {
        secret: secret.to_string(),
        steps,
        guesses,
        success,
        degraded_lookups,
    }
}
