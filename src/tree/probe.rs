//! Probe selection strategies
//!
//! Defines the `ProbeSelector` trait and concrete implementations. The
//! tree builder asks a selector for the next probe word at every internal
//! node; swapping the selector changes the quality of the resulting tree
//! without touching the construction contract.

use super::node::HistoryStep;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for choosing the probe word asked at an internal node
pub trait ProbeSelector {
    /// Pick the probe for a node, as an index into `vocabulary`
    ///
    /// `candidates` is the node's surviving candidate index set and
    /// `history` the probe/feedback pairs on the path from the root; both
    /// are advisory — the baseline ignores them entirely. Callers never
    /// invoke a selector with an empty vocabulary.
    fn select(&mut self, vocabulary: &[String], candidates: &[usize], history: &[HistoryStep])
    -> usize;
}

/// Uninformed baseline: a probe drawn uniformly from the full vocabulary
///
/// Deliberately weak — it does not even restrict itself to the current
/// candidate set. Production trees should swap in a selector that
/// minimizes worst-case or expected group sizes; this one exists so the
/// construction machinery can be exercised and seeded reproducibly.
pub struct RandomProbe {
    rng: StdRng,
}

impl RandomProbe {
    /// A selector seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A selector with a fixed seed, for reproducible builds
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeSelector for RandomProbe {
    fn select(&mut self, vocabulary: &[String], _: &[usize], _: &[HistoryStep]) -> usize {
        self.rng.random_range(0..vocabulary.len())
    }
}

/// Always picks the same probe index; used by tests and demos
pub struct FixedProbe(pub usize);

impl ProbeSelector for FixedProbe {
    fn select(&mut self, _: &[String], _: &[usize], _: &[HistoryStep]) -> usize {
        self.0
    }
}
