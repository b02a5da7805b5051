//! Display functions for command results

use super::formatters::{
    DEFAULT_MAX_LINES, colored_guess, distribution_bar, format_word_list, pattern_to_emoji,
};
use crate::commands::{AnalysisResult, BenchmarkResult, StartRanking};
use crate::core::Pattern;
use crate::solver::minimax::Selection;
use crate::solver::{MAX_STEPS, SolveOutcome, SolveReport};
use colored::Colorize;

/// Print the trace of an offline solve
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.decode().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for record in &report.steps {
        let pattern = record.pattern.unwrap_or(Pattern::PERFECT);
        println!(
            "\nStep {}: {} {}",
            record.step,
            colored_guess(record.guess, pattern),
            pattern_to_emoji(pattern)
        );

        if verbose {
            println!("  Policy:     {}", record.policy);
            if record.pattern.is_some() {
                println!(
                    "  Feedback:   {} ({}, {} placed, {} misplaced)",
                    pattern.to_digits(),
                    pattern.value(),
                    pattern.count_hits(),
                    pattern.count_partials()
                );
                println!("  Remaining:  {}", record.remaining);
            }
        }
        if !record.alternates.is_empty() {
            println!("  Alternates:");
            println!("{}", format_word_list(&record.alternates, DEFAULT_MAX_LINES));
        }
    }

    println!();
    match report.outcome {
        SolveOutcome::Solved(steps) => {
            println!("{}", format!("✅ Solved in {steps} steps!").green().bold());
        }
        SolveOutcome::Failed(steps) => println!(
            "{}",
            format!("❌ Found in {steps} steps, over the {MAX_STEPS}-step limit")
                .red()
                .bold()
        ),
        SolveOutcome::Abandoned(steps) => println!(
            "{}",
            format!("❌ Gave up after {steps} steps").red().bold()
        ),
    }
}

/// Print how one guess partitions the possibilities
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.decode().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possibilities:", result.total_candidates);
    println!("   Patterns:        {}", result.buckets);
    println!(
        "   Largest group:   {}",
        result.largest_partition.to_string().bright_yellow().bold()
    );
    println!(
        "   Expected:        {:.1} remain",
        result.expected_remaining
    );

    if !result.top_partitions.is_empty() {
        println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
        for &(pattern, size) in &result.top_partitions {
            let bar = distribution_bar(size, result.largest_partition, 30);
            println!("   {} {} {size:5}", pattern_to_emoji(pattern), bar.green());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Seed:             {}", result.seed);
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average steps:    {}",
        format!("{:.3}", result.average_steps)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_steps.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_steps.to_string().yellow()
    );
    println!("   Failures:         {}", result.failures);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&steps, &count) in &result.distribution {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar = distribution_bar(count, max_count, 40);
        let bar = if steps > MAX_STEPS { bar.red() } else { bar.green() };
        println!("   {steps:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print a minimax selection and any tied alternates
pub fn print_selection(selection: &Selection, possibilities: usize) {
    println!(
        "\nBest guess: {} (largest group {} of {possibilities})",
        selection.guess.decode().to_uppercase().bright_yellow().bold(),
        selection.largest_partition
    );
    if !selection.alternates.is_empty() {
        println!("Alternates:");
        println!(
            "{}",
            format_word_list(&selection.alternates, DEFAULT_MAX_LINES)
        );
    }
}

/// Print a start-word ranking
pub fn print_start_ranking(ranking: &StartRanking) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "START WORD RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for &(word, fails) in &ranking.results {
        let line = format!("   {word}: {fails} fails");
        if fails == ranking.fewest_fails {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    if !ranking.best.is_empty() {
        println!(
            "\nLowest failures ({}):",
            ranking.fewest_fails.to_string().bright_yellow().bold()
        );
        println!("{}", format_word_list(&ranking.best, DEFAULT_MAX_LINES));
    }
}
