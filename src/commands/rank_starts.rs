//! Start-word ranking
//!
//! Plays each candidate word at a chosen step of the plan and keeps the ones
//! that fail on the fewest targets. Each run stops as soon as it has more
//! failures than the best candidate so far.

use super::test_all::{TestAllConfig, run_test_all};
use crate::core::Word;
use crate::solver::{FeedbackEngine, SolveError, Solver, StepPolicy, StrategyPlan};
use log::{debug, info};

/// Opening words compared by default at step 1
pub const FIRST_STEP_CANDIDATES: [&str; 11] = [
    "bevel", "compt", "feted", "finks", "fiver", "kevil", "sarks", "stowp", "swarf", "vises",
    "visor",
];

/// Second words compared by default at step 2
pub const SECOND_STEP_CANDIDATES: [&str; 8] = [
    "busks", "carns", "fears", "marcs", "narcs", "neifs", "reifs", "vangs",
];

/// Where the candidate words are played and against what
pub struct RankConfig {
    /// 1-based step the candidate is played at
    pub step: usize,
    pub plan: StrategyPlan,
}

/// Outcome of a ranking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRanking {
    /// Failure count of the best candidates
    pub fewest_fails: usize,
    /// Candidates reaching `fewest_fails`, in input order
    pub best: Vec<Word>,
    /// Every candidate with the failures counted before its run stopped
    pub results: Vec<(Word, usize)>,
}

/// Rank candidate words by failures over `targets`
///
/// Targets double as the possibility source.
///
/// # Errors
///
/// Returns `SolveError::StepNotPlayed` if the candidate step lies outside the
/// plan or before its starting step, otherwise the first `SolveError` raised by
/// a solve.
pub fn rank_start_words(
    engine: &FeedbackEngine,
    pool: &[Word],
    targets: &[Word],
    config: RankConfig,
    candidates: &[Word],
) -> Result<StartRanking, SolveError> {
    let plan = config
        .plan
        .with_step(config.step, StepPolicy::ExternallySupplied);
    if config.step <= plan.starting_step() || !plan.uses_input_word() {
        return Err(SolveError::StepNotPlayed { step: config.step });
    }
    let mut solver = Solver::new(engine, pool, targets, plan);

    let mut fewest_fails = usize::MAX;
    let mut best = Vec::new();
    let mut results = Vec::with_capacity(candidates.len());

    for &candidate in candidates {
        solver.set_input_word(candidate);
        let stats = run_test_all(
            &solver,
            targets,
            TestAllConfig {
                max_fails: (fewest_fails != usize::MAX).then_some(fewest_fails),
                ..TestAllConfig::default()
            },
        )?;
        let fails = stats.fail_count();
        debug!("{candidate}: {fails} fails over {} targets", stats.tested);

        if fails < fewest_fails {
            fewest_fails = fails;
            best.clear();
            best.push(candidate);
        } else if fails == fewest_fails {
            best.push(candidate);
        }
        results.push((candidate, fails));
    }

    info!("lowest fails at {fewest_fails}");
    Ok(StartRanking {
        fewest_fails: if candidates.is_empty() { 0 } else { fewest_fails },
        best,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Dictionary, WordSets};

    #[test]
    fn default_candidates_in_embedded_dictionary() {
        let sets = WordSets::embedded().unwrap();
        for text in FIRST_STEP_CANDIDATES.iter().chain(&SECOND_STEP_CANDIDATES) {
            assert!(sets.dictionary.lookup(text).is_valid(), "{text} missing");
        }
    }

    #[test]
    fn ranks_by_fewest_failures() {
        // "aaaab" splits nothing beyond itself; "bcdfg" separates every target
        let dictionary = Dictionary::from_texts([
            "aaaab", "aaaac", "aaaad", "aaaaf", "aaaag", "aaaah", "aaaai", "aaaaj", "aaaak",
            "bcdfg", "hijkz",
        ])
        .unwrap();
        let engine = FeedbackEngine::for_dictionary(dictionary.len());
        let targets = &dictionary.words()[..9];
        let plan = (2..=6).fold(StrategyPlan::all_optimal(), |p, s| {
            p.with_step(s, StepPolicy::TakeFirstRemaining)
        });
        let plan = plan.with_after_plan(StepPolicy::TakeFirstRemaining);

        let candidates = [
            dictionary.lookup("aaaab"),
            dictionary.lookup("bcdfg"),
            dictionary.lookup("aaaac"),
        ];
        let ranking = rank_start_words(
            &engine,
            dictionary.words(),
            targets,
            RankConfig { step: 1, plan },
            &candidates,
        )
        .unwrap();

        assert_eq!(ranking.fewest_fails, 0);
        assert_eq!(ranking.best, vec![candidates[1]]);
        assert_eq!(ranking.results[0], (candidates[0], 3));
        assert_eq!(ranking.results[1], (candidates[1], 0));
        // stopped at its first failure once a clean candidate was known
        assert_eq!(ranking.results[2], (candidates[2], 1));
    }

    #[test]
    fn unplayed_step_rejected() {
        let dictionary = Dictionary::from_texts(["crane", "slate"]).unwrap();
        let engine = FeedbackEngine::for_dictionary(dictionary.len());
        let rank = |step, plan| {
            rank_start_words(
                &engine,
                dictionary.words(),
                dictionary.words(),
                RankConfig { step, plan },
                dictionary.words(),
            )
        };

        assert_eq!(
            rank(2, StrategyPlan::all_optimal().with_starting_step(3)),
            Err(SolveError::StepNotPlayed { step: 2 })
        );
        assert_eq!(
            rank(9, StrategyPlan::all_optimal()),
            Err(SolveError::StepNotPlayed { step: 9 })
        );
        assert!(rank(3, StrategyPlan::all_optimal().with_starting_step(3)).is_ok());
    }

    #[test]
    fn candidates_from_later_starting_step() {
        let dictionary = Dictionary::from_texts(["abcde", "fghij", "klmno", "pqrst"]).unwrap();
        let engine = FeedbackEngine::for_dictionary(dictionary.len());
        let candidates = [dictionary.lookup("pqrst")];
        let ranking = rank_start_words(
            &engine,
            dictionary.words(),
            dictionary.words(),
            RankConfig {
                step: 3,
                plan: StrategyPlan::all_optimal().with_starting_step(3),
            },
            &candidates,
        )
        .unwrap();

        // found by step 6 at the latest: pqrst then at most three more guesses
        assert_eq!(ranking.fewest_fails, 0);
        assert_eq!(ranking.best, candidates.to_vec());
    }

    #[test]
    fn empty_candidate_list() {
        let dictionary = Dictionary::from_texts(["crane", "slate"]).unwrap();
        let engine = FeedbackEngine::for_dictionary(dictionary.len());
        let ranking = rank_start_words(
            &engine,
            dictionary.words(),
            dictionary.words(),
            RankConfig {
                step: 1,
                plan: StrategyPlan::all_optimal(),
            },
            &[],
        )
        .unwrap();
        assert_eq!(ranking.fewest_fails, 0);
        assert!(ranking.best.is_empty());
    }
}
