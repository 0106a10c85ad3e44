//! Display functions for command results

use super::formatters::{create_bar, percent};
use crate::commands::{BuildReport, EvaluateStats, SolveResult};
use colored::Colorize;

/// Print the structural summary of a fitted tree
pub fn print_build_report(report: &BuildReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TREE SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Vocabulary:        {}", report.words);
    println!("   Nodes:             {}", report.nodes);
    println!("   Leaves:            {}", report.leaves);
    println!("   Deepest leaf:      {}", report.deepest_leaf);
    println!(
        "   Largest leaf:      {}",
        if report.largest_leaf > crate::commands::GUESS_LIMIT {
            // More candidates than the guess budget: some secrets are lost
            format!("{}", report.largest_leaf).yellow().to_string()
        } else {
            format!("{}", report.largest_leaf).green().to_string()
        }
    );

    if report.degenerate_splits > 0 {
        println!(
            "\n{}",
            format!(
                "⚠ {} split(s) discriminated nothing — consider a better probe selector",
                report.degenerate_splits
            )
            .yellow()
        );
    }
}

/// Print the play-by-play of one simulated game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        if step.probe.is_empty() {
            println!("\nStep {}: (length of the word?)", i + 1);
        } else {
            println!("\nStep {}: {}", i + 1, step.probe.to_uppercase());
        }
        println!("  Feedback:   {}", step.response);
        if verbose {
            println!("  Candidates: {}", step.candidates_after);
        }
    }

    println!("\nGuesses: {}", result.guesses.join(", "));
    if result.degraded_lookups > 0 {
        println!(
            "{}",
            format!(
                "⚠ {} feedback pattern(s) were unknown to the tree",
                result.degraded_lookups
            )
            .yellow()
        );
    }

    if result.success {
        println!(
            "{}",
            format!("✅ Found in {} probe(s)!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Secret not among the guesses".red().bold());
    }
}

/// Print the aggregate results of a whole-vocabulary evaluation
pub fn print_evaluate_stats(stats: &EvaluateStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", stats.total_words);
    println!(
        "   Solved:           {} ({})",
        stats.solved,
        percent(stats.solve_rate).bright_yellow().bold()
    );
    println!("   Failed:           {}", stats.failed);
    println!("   Average probes:   {:.2}", stats.average_probes);
    println!("   Worst case:       {} probes", stats.max_probes);
    if stats.degraded_games > 0 {
        println!(
            "   Degraded games:   {}",
            format!("{}", stats.degraded_games).yellow()
        );
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", stats.words_per_second);

    if stats.probe_distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Probe distribution:".bright_cyan().bold());
    let most = stats
        .probe_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);

    let mut counts: Vec<(usize, usize)> = stats
        .probe_distribution
        .iter()
        .map(|(&probes, &count)| (probes, count))
        .collect();
    counts.sort_unstable();

    for (probes, count) in counts {
        println!(
            "   {:>2} probes: [{}] {}",
            probes,
            create_bar(count as f64, most as f64, 30).green(),
            count
        );
    }
}
