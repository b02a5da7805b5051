//! Comprehensive test - solve every target in a set
//!
//! Runs one strategy plan against each target word and tallies how many steps
//! each solve took.

use crate::core::Word;
use crate::output::formatters::{distribution_bar, format_word_list};
use crate::solver::{MAX_STEPS, SolveError, SolveOutcome, Solver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Options for a comprehensive test
#[derive(Debug, Clone, Copy, Default)]
pub struct TestAllConfig {
    /// Stop once the failure count goes past this
    pub max_fails: Option<usize>,
    /// Only test the first `limit` targets
    pub limit: Option<usize>,
    pub show_progress: bool,
}

/// Statistics from a comprehensive test
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub tested: usize,
    /// Steps used -> number of targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets needing more than `MAX_STEPS`, with their step counts
    pub fails: Vec<(Word, usize)>,
    /// Targets solved in exactly `MAX_STEPS`
    pub almosts: Vec<Word>,
    pub total_steps: usize,
    pub average_steps: f64,
    pub stopped_early: bool,
    pub total_time: Duration,
}

impl TestAllStatistics {
    #[must_use]
    pub fn fail_count(&self) -> usize {
        self.fails.len()
    }
}

/// Best average a solver could reach on `answers` targets
///
/// Assumes one target is hit on the first guess, every other first-guess
/// pattern isolates a single target hit on the second, and all remaining
/// targets take three.
///
/// # Examples
/// ```
/// use wordle_minimax::commands::idealized_average;
///
/// let expected = (1.0 + 2.0 * 242.0 + 3.0 * 57.0) / 300.0;
/// assert!((idealized_average(300) - expected).abs() < 1e-9);
/// ```
#[must_use]
pub fn idealized_average(answers: usize) -> f64 {
    let patterns_per_step = 3f64.powi(5);
    let answers = answers as f64;
    let three_step = answers - patterns_per_step;
    (1.0 + 2.0 * (patterns_per_step - 1.0) + 3.0 * three_step) / answers
}

/// Run the solver on every target
///
/// The solver's possibility source should contain every target.
///
/// # Errors
///
/// Returns the first `SolveError` raised by a solve.
pub fn run_test_all(
    solver: &Solver<'_>,
    targets: &[Word],
    config: TestAllConfig,
) -> Result<TestAllStatistics, SolveError> {
    let targets = &targets[..config.limit.unwrap_or(targets.len()).min(targets.len())];

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut fails = Vec::new();
    let mut almosts = Vec::new();
    let mut total_steps = 0;
    let mut tested = 0;
    let mut stopped_early = false;

    let start = Instant::now();

    for &target in targets {
        let outcome = solver.solve(target)?.outcome;
        let steps = outcome.steps();

        tested += 1;
        total_steps += steps;
        *distribution.entry(steps).or_insert(0) += 1;

        match outcome {
            SolveOutcome::Solved(n) if n == MAX_STEPS => almosts.push(target),
            SolveOutcome::Solved(_) => {}
            SolveOutcome::Failed(n) | SolveOutcome::Abandoned(n) => {
                debug!("{target} failed after {n} steps");
                fails.push((target, n));
            }
        }

        if tested % 10 == 0 {
            pb.set_message(format!("Avg: {:.3}", total_steps as f64 / tested as f64));
        }
        pb.inc(1);

        if config.max_fails.is_some_and(|max| fails.len() > max) {
            stopped_early = true;
            break;
        }
    }

    pb.finish_and_clear();

    Ok(TestAllStatistics {
        total_words: targets.len(),
        tested,
        distribution,
        fails,
        almosts,
        total_steps,
        average_steps: if tested > 0 {
            total_steps as f64 / tested as f64
        } else {
            0.0
        },
        stopped_early,
        total_time: start.elapsed(),
    })
}

/// Print comprehensive test statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Words tested:        {}/{}", stats.tested, stats.total_words);
    let fail_text = format!("{} Ls", stats.fail_count());
    println!(
        "  Failures:            {}",
        if stats.fails.is_empty() {
            fail_text.green()
        } else {
            fail_text.red()
        }
    );
    println!(
        "  Average steps:       {}",
        format!("{:.4}", stats.average_steps).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.stopped_early {
        println!("  {}", "Stopped early: failure limit exceeded".yellow());
    }

    println!("\n📈 {}", "Step Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for (&steps, &count) in &stats.distribution {
        let bar = distribution_bar(count, max_count, 40);
        let bar = if steps > MAX_STEPS { bar.red() } else { bar.green() };
        println!("  {steps:2} steps: {bar} {count:4}");
    }

    if !stats.almosts.is_empty() {
        println!("\n😰 {}", format!("{MAX_STEPS} STEPS").yellow().bold());
        println!("{}", format_word_list(&stats.almosts, 4));
    }

    let mut by_steps: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
    for &(word, steps) in &stats.fails {
        by_steps.entry(steps).or_default().push(word);
    }
    for (steps, words) in by_steps {
        println!("\n❌ {}", format!("{steps} STEPS").red().bold());
        println!("{}", format_word_list(&words, 4));
    }
}
