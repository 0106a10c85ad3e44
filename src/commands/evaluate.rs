//! Whole-vocabulary evaluation
//!
//! Plays every vocabulary word (or a limited subset) against a fitted
//! tree and aggregates the outcomes.

use super::solve::solve_word;
use crate::tree::StrategyTree;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregate statistics from evaluating a tree
#[derive(Debug)]
pub struct EvaluateStats {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub solve_rate: f64,
    pub average_probes: f64,
    pub max_probes: usize,
    /// How many games used each probe count
    pub probe_distribution: HashMap<usize, usize>,
    pub degraded_games: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Evaluate a tree against its own vocabulary
///
/// Every word takes a turn as the secret. `limit` restricts the run to
/// the first N words; `show_progress` draws a progress bar.
#[must_use]
pub fn run_evaluate(tree: &StrategyTree, limit: Option<usize>, show_progress: bool) -> EvaluateStats {
    let secrets: Vec<String> = tree
        .words()
        .iter()
        .take(limit.unwrap_or(tree.words().len()))
        .cloned()
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(
                |_| ProgressStyle::default_bar(),
                |s| s.progress_chars("█▓▒░"),
            );
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut total_probes = 0;
    let mut max_probes = 0;
    let mut degraded_games = 0;
    let mut probe_distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, secret) in secrets.iter().enumerate() {
        let result = solve_word(tree, secret);

        let probes = result.steps.len();
        total_probes += probes;
        max_probes = max_probes.max(probes);
        *probe_distribution.entry(probes).or_insert(0) += 1;

        if result.success {
            solved += 1;
        }
        if result.degraded_lookups > 0 {
            degraded_games += 1;
        }

        if let Some(pb) = &pb {
            if idx % 10 == 0 && idx > 0 {
                let rate = solved as f64 / (idx + 1) as f64 * 100.0;
                pb.set_message(format!("Solved: {rate:.1}%"));
            }
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_with_message("Complete!");
    }

    let duration = start.elapsed();
    let total_words = secrets.len();

    EvaluateStats {
        total_words,
        solved,
        failed: total_words - solved,
        solve_rate: if total_words > 0 {
            solved as f64 / total_words as f64
        } else {
            0.0
        },
        average_probes: if total_words > 0 {
            total_probes as f64 / total_words as f64
        } else {
            0.0
        },
        max_probes,
        probe_distribution,
        degraded_games,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FixedProbe, RandomProbe, SilentObserver, TreeConfig};

    fn vocab() -> Vec<String> {
        ["cat", "car", "bar", "bat"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn evaluate_solves_all_with_singleton_leaves() {
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut FixedProbe(1),
            &mut SilentObserver,
        );

        let stats = run_evaluate(&tree, None, false);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.failed, 0);
        assert!((stats.solve_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(stats.degraded_games, 0);
        // Every game asked the length question plus the fixed probe.
        assert_eq!(stats.probe_distribution.get(&2), Some(&4));
        assert_eq!(stats.max_probes, 2);
    }

    #[test]
    fn limit_restricts_evaluation() {
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut RandomProbe::seeded(8),
            &mut SilentObserver,
        );

        let stats = run_evaluate(&tree, Some(2), false);
        assert_eq!(stats.total_words, 2);
    }

    #[test]
    fn evaluate_with_progress_bar_matches_quiet_run() {
        let tree = StrategyTree::fit(
            vocab(),
            &TreeConfig::new(1, 3),
            &mut FixedProbe(1),
            &mut SilentObserver,
        );

        // The bar is cosmetic; the numbers must not depend on it.
        let quiet = run_evaluate(&tree, None, false);
        let drawn = run_evaluate(&tree, None, true);
        assert_eq!(drawn.total_words, quiet.total_words);
        assert_eq!(drawn.solved, quiet.solved);
        assert_eq!(drawn.probe_distribution, quiet.probe_distribution);
    }

    #[test]
    fn probes_never_exceed_max_depth() {
        let config = TreeConfig::new(1, 4);
        let tree = StrategyTree::fit(
            vocab(),
            &config,
            &mut RandomProbe::seeded(21),
            &mut SilentObserver,
        );

        let stats = run_evaluate(&tree, None, false);
        assert!(stats.max_probes <= config.max_depth);
    }
}
