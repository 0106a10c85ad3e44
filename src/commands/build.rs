//! Tree building command
//!
//! Builds a strategy tree from a vocabulary and surveys its structure.

use crate::tree::{BuildObserver, ProbeSelector, StrategyTree, TreeConfig};

/// Structural summary of a fitted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub words: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub deepest_leaf: usize,
    pub largest_leaf: usize,
    pub degenerate_splits: usize,
}

/// Build a tree and summarize it
///
/// `observer` receives progress events during construction; pass
/// [`SilentObserver`](crate::tree::SilentObserver) for a quiet build or the
/// tree printer for the drawn progress view.
pub fn build_tree<S: ProbeSelector, O: BuildObserver>(
    words: Vec<String>,
    config: &TreeConfig,
    selector: &mut S,
    observer: &mut O,
) -> (StrategyTree, BuildReport) {
    let tree = StrategyTree::fit(words, config, selector, observer);
    let report = survey(&tree);
    (tree, report)
}

/// Walk a fitted tree and collect structural statistics
#[must_use]
pub fn survey(tree: &StrategyTree) -> BuildReport {
    let mut report = BuildReport {
        words: tree.words().len(),
        nodes: 0,
        leaves: 0,
        deepest_leaf: 0,
        largest_leaf: 0,
        degenerate_splits: 0,
    };
    visit(tree.root(), &mut report);
    report
}

fn visit(node: &crate::tree::Node, report: &mut BuildReport) {
    report.nodes += 1;

    if node.is_leaf() {
        report.leaves += 1;
        report.deepest_leaf = report.deepest_leaf.max(node.depth());
        report.largest_leaf = report.largest_leaf.max(node.candidates().len());
        return;
    }

    // A split that produced a single group discriminated nothing
    if node.children().len() < 2 {
        report.degenerate_splits += 1;
    }

    for (_, child) in node.children() {
        visit(child, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FixedProbe, RandomProbe, SilentObserver};

    fn vocab() -> Vec<String> {
        ["cat", "car", "bar", "bat"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn survey_counts_singleton_leaves() {
        let (tree, report) = build_tree(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut FixedProbe(1),
            &mut SilentObserver,
        );

        // Root -> length group -> four singleton leaves.
        assert_eq!(report.words, 4);
        assert_eq!(report.leaves, 4);
        assert_eq!(report.nodes, 6);
        assert_eq!(report.largest_leaf, 1);
        assert_eq!(report.deepest_leaf, 2);
        // The root's length split over a single-length vocabulary is the
        // one degenerate split.
        assert_eq!(report.degenerate_splits, 1);
        assert_eq!(survey(&tree), report);
    }

    #[test]
    fn shallow_tree_reports_large_leaves() {
        let (_, report) = build_tree(
            vocab(),
            &TreeConfig::new(1, 1),
            &mut RandomProbe::seeded(1),
            &mut SilentObserver,
        );

        // Depth capped at 1: the length group becomes a leaf of all four.
        assert_eq!(report.leaves, 1);
        assert_eq!(report.largest_leaf, 4);
        assert_eq!(report.deepest_leaf, 1);
    }

    #[test]
    fn leaf_only_tree_has_one_node() {
        let (_, report) = build_tree(
            vocab(),
            &TreeConfig::new(10, 5),
            &mut RandomProbe::seeded(1),
            &mut SilentObserver,
        );

        assert_eq!(report.nodes, 1);
        assert_eq!(report.leaves, 1);
        assert_eq!(report.largest_leaf, 4);
        assert_eq!(report.deepest_leaf, 0);
        assert_eq!(report.degenerate_splits, 0);
    }
}
