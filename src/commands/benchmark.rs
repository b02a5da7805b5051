//! Benchmark command
//!
//! Solves a random sample of targets and measures speed and step counts.

use crate::core::Word;
use crate::solver::{SolveError, Solver};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_words: usize,
    pub total_steps: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub failures: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw up to `count` distinct targets, reproducibly for a given seed
#[must_use]
pub fn sample_targets(targets: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    targets.choose_multiple(&mut rng, count).copied().collect()
}

/// Run benchmark on a random sample of target words
///
/// Without a seed a random one is drawn; the seed used is reported.
///
/// # Errors
///
/// Returns the first `SolveError` raised by a solve.
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult, SolveError> {
    let seed = seed.unwrap_or_else(rand::random);
    let sample = sample_targets(targets, count, seed);

    let start = Instant::now();
    let mut total_steps = 0;
    let mut min_steps = usize::MAX;
    let mut max_steps = 0;
    let mut failures = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for &target in &sample {
        let outcome = solver.solve(target)?.outcome;
        let steps = outcome.steps();

        total_steps += steps;
        min_steps = min_steps.min(steps);
        max_steps = max_steps.max(steps);
        if outcome.is_failure() {
            failures += 1;
        }
        *distribution.entry(steps).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = sample.len();

    Ok(BenchmarkResult {
        seed,
        total_words,
        total_steps,
        average_steps: if total_words > 0 {
            total_steps as f64 / total_words as f64
        } else {
            0.0
        },
        min_steps: if total_words > 0 { min_steps } else { 0 },
        max_steps,
        failures,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
