//! Strategy tree construction and prediction
//!
//! `StrategyTree` owns the vocabulary and the fitted root node. Built once,
//! immutable afterwards; retraining means building a fresh tree.

use super::node::{Descent, Node};
use super::observer::BuildObserver;
use super::probe::ProbeSelector;
use crate::core::Pattern;

/// Build-time thresholds
///
/// A node becomes a leaf when its candidate set has at most
/// `min_leaf_size` words or its depth has reached `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Stop splitting at or below this candidate count (>= 1)
    pub min_leaf_size: usize,
    /// Never split at or beyond this depth; bounds recursion and traversal
    pub max_depth: usize,
}

impl TreeConfig {
    /// Create a config with explicit thresholds
    #[must_use]
    pub const fn new(min_leaf_size: usize, max_depth: usize) -> Self {
        Self {
            min_leaf_size,
            max_depth,
        }
    }
}

impl Default for TreeConfig {
    /// The reference game settings: singleton leaves, fifteen probes deep
    fn default() -> Self {
        Self::new(1, 15)
    }
}

/// A fitted decision strategy for one vocabulary
///
/// Maps observed feedback histories to shrinking candidate sets; a
/// traversal ends at a leaf whose words are the final guesses.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTree {
    words: Vec<String>,
    root: Node,
}

impl StrategyTree {
    /// Build a strategy over `words`
    ///
    /// The root starts with the full candidate index range and an empty
    /// history; construction is a single depth-first pre-order pass with
    /// no retries. `selector` chooses probes at internal nodes and
    /// `observer` receives progress events (use
    /// [`SilentObserver`](super::SilentObserver) for none).
    pub fn fit<S: ProbeSelector, O: BuildObserver>(
        words: Vec<String>,
        config: &TreeConfig,
        selector: &mut S,
        observer: &mut O,
    ) -> Self {
        let mut root = Node::root((0..words.len()).collect());
        root.fit(&words, config, selector, observer);
        Self { words, root }
    }

    /// The fitted root node
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The vocabulary the tree was fitted over, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Resolve a probe index to its word; empty for the root sentinel
    #[must_use]
    pub fn probe_word(&self, probe: Option<usize>) -> &str {
        probe
            .and_then(|i| self.words.get(i))
            .map_or("", String::as_str)
    }

    /// Walk the tree with a stream of observed feedback patterns
    ///
    /// One pattern is consumed per internal node. Unknown patterns fall
    /// back to the node's first child and the walk continues; a stream
    /// that runs dry ends the walk at the current node. Returns the final
    /// node's candidate words in vocabulary order — never more than
    /// `max_depth` lookups deep.
    pub fn predict<'a, I>(&'a self, feedback: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = Pattern>,
    {
        let mut feedback = feedback.into_iter();
        let mut node = &self.root;

        while !node.is_leaf() {
            let Some(response) = feedback.next() else {
                break;
            };
            node = match node.get_child(&response) {
                Descent::Matched(child) | Descent::Degraded(child) => child,
                Descent::SelfLoop => break,
            };
        }

        node.candidates()
            .iter()
            .map(|&i| self.words[i].as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::observer::SilentObserver;
    use crate::tree::probe::{FixedProbe, RandomProbe};

    fn vocab() -> Vec<String> {
        ["cat", "car", "bar", "bat"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn end_to_end_fixed_probe_scenario() {
        // Probe fixed to "car": cat -> "c a _", car -> "c a r",
        // bar -> "_ a r", bat -> "_ a _". Four groups, four singleton
        // leaves below the root's length split.
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut FixedProbe(1),
            &mut SilentObserver,
        );

        let feedback = vec![
            Pattern::reveal("car", ""),     // length question
            Pattern::reveal("car", "car"),  // "c a r"
        ];
        assert_eq!(tree.predict(feedback), ["car"]);

        let feedback = vec![Pattern::reveal("bat", ""), Pattern::reveal("bat", "car")];
        assert_eq!(tree.predict(feedback), ["bat"]);
    }

    #[test]
    fn leaves_satisfy_stopping_condition() {
        let config = TreeConfig::new(2, 4);
        let tree = StrategyTree::fit(
            vocab(),
            &config,
            &mut RandomProbe::seeded(3),
            &mut SilentObserver,
        );

        fn check(node: &crate::tree::Node, config: &TreeConfig) {
            if node.is_leaf() {
                assert!(
                    node.candidates().len() <= config.min_leaf_size
                        || node.depth() >= config.max_depth
                );
            } else {
                // Internal nodes violate both thresholds
                assert!(node.candidates().len() > config.min_leaf_size);
                assert!(node.depth() < config.max_depth);
                for (_, child) in node.children() {
                    check(child, config);
                }
            }
        }
        check(tree.root(), &config);
    }

    #[test]
    fn empty_vocabulary_builds_empty_leaf() {
        let tree = StrategyTree::fit(
            Vec::new(),
            &TreeConfig::default(),
            &mut RandomProbe::seeded(0),
            &mut SilentObserver,
        );

        assert!(tree.root().is_leaf());
        assert!(tree.predict(std::iter::empty()).is_empty());
    }

    #[test]
    fn single_word_vocabulary_is_immediate_leaf() {
        let tree = StrategyTree::fit(
            vec!["only".to_string()],
            &TreeConfig::default(),
            &mut RandomProbe::seeded(0),
            &mut SilentObserver,
        );

        assert!(tree.root().is_leaf());
        assert_eq!(tree.predict(std::iter::empty()), ["only"]);
    }

    #[test]
    fn predict_consumes_at_most_max_depth_patterns() {
        let config = TreeConfig::new(1, 2);
        let tree = StrategyTree::fit(
            vocab(),
            &config,
            &mut RandomProbe::seeded(11),
            &mut SilentObserver,
        );

        // An endless stream of junk patterns: the walk must still stop.
        let mut consumed = 0;
        let junk = std::iter::repeat_with(|| {
            consumed += 1;
            Pattern::reveal("zzzzzz", "")
        })
        .take(100);

        let guesses = tree.predict(junk);
        assert!(!guesses.is_empty());
        assert!(consumed <= config.max_depth);
    }

    #[test]
    fn predict_with_short_stream_returns_current_candidates() {
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut FixedProbe(1),
            &mut SilentObserver,
        );

        // Only the length answer: stops at the depth-1 node holding all
        // four words.
        let guesses = tree.predict(vec![Pattern::reveal("cat", "")]);
        assert_eq!(guesses, ["cat", "car", "bar", "bat"]);
    }

    #[test]
    fn predict_unknown_pattern_degrades_to_first_child() {
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut FixedProbe(1),
            &mut SilentObserver,
        );

        // Junk at every level: falls back to the first-registered child
        // each time, ending at the leaf for "cat" (first scan order).
        let junk = vec![Pattern::reveal("qqqqqq", ""), Pattern::reveal("qqqqqq", "")];
        assert_eq!(tree.predict(junk), ["cat"]);
    }

    #[test]
    fn seeded_rebuild_is_structurally_identical() {
        let config = TreeConfig::new(1, 6);
        let a = StrategyTree::fit(
            vocab(),
            &config,
            &mut RandomProbe::seeded(99),
            &mut SilentObserver,
        );
        let b = StrategyTree::fit(
            vocab(),
            &config,
            &mut RandomProbe::seeded(99),
            &mut SilentObserver,
        );

        // Same splits, same leaf contents, same order throughout.
        assert_eq!(a, b);
    }

    #[test]
    fn candidate_sets_shrink_along_paths() {
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 5),
            &mut RandomProbe::seeded(17),
            &mut SilentObserver,
        );

        fn check(node: &crate::tree::Node) {
            for (_, child) in node.children() {
                assert!(child.candidates().len() <= node.candidates().len());
                assert!(
                    child
                        .candidates()
                        .iter()
                        .all(|i| node.candidates().contains(i))
                );
                check(child);
            }
        }
        check(tree.root());
    }

    #[test]
    fn mixed_length_vocabulary_splits_by_length_first() {
        let words: Vec<String> = ["cat", "carts", "bat", "barge"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let tree = StrategyTree::fit(
            words,
            &TreeConfig::new(1, 4),
            &mut RandomProbe::seeded(5),
            &mut SilentObserver,
        );

        // The implicit length question partitions 3-letter from 5-letter
        // words before any real probe is asked.
        let root = tree.root();
        assert_eq!(root.children().len(), 2);
        for (key, child) in root.children() {
            assert_eq!(key.hits(), 0);
            for &i in child.candidates() {
                assert_eq!(tree.words()[i].chars().count(), key.len());
            }
        }
    }
}
