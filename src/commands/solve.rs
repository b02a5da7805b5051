//! Word solving command
//!
//! Solves a specific target word and returns the step trace.

use crate::solver::{SolveError, SolveReport, Solver, StepPolicy, StrategyPlan};
use crate::wordlists::Dictionary;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Opening word replacing the standard one
    pub start: Option<String>,
    /// Record tied alternates at computed steps
    pub alternates: bool,
    pub step_limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            start: None,
            alternates: false,
            step_limit: None,
        }
    }

    /// The standard plan with this configuration's overrides applied
    ///
    /// # Errors
    /// Returns `SolveError::UnknownWord` if the start word is not in the dictionary.
    pub fn plan(&self, dictionary: &Dictionary) -> Result<StrategyPlan, SolveError> {
        let mut plan = StrategyPlan::standard(dictionary);
        if let Some(start) = &self.start {
            let word = dictionary.lookup(start);
            if !word.is_valid() {
                return Err(SolveError::UnknownWord(start.clone()));
            }
            plan = plan.with_step(1, StepPolicy::FixedWord(word));
        }
        if self.alternates {
            plan = plan.with_alternates();
        }
        if let Some(limit) = self.step_limit {
            plan = plan.with_step_limit(limit);
        }
        Ok(plan)
    }
}

/// Solve the configured target with a solver built on the same dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not in the dictionary
/// - The solver cannot provide a valid guess
pub fn solve_word(
    target: &str,
    dictionary: &Dictionary,
    solver: &Solver<'_>,
) -> Result<SolveReport, SolveError> {
    let word = dictionary.lookup(target);
    if !word.is_valid() {
        return Err(SolveError::UnknownWord(target.to_string()));
    }
    solver.solve(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FeedbackEngine, MAX_STEPS};
    use crate::wordlists::WordSets;

    #[test]
    fn solve_word_succeeds() {
        let sets = WordSets::embedded().unwrap();
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());
        let plan = SolveConfig::new("tangy".to_string()).plan(&sets.dictionary).unwrap();
        let words = sets.dictionary.words();
        let solver = Solver::new(&engine, words, words, plan);

        let report = solve_word("tangy", &sets.dictionary, &solver).unwrap();
        assert_eq!(report.target.decode(), "tangy");
        assert_eq!(report.steps[0].guess.decode(), "stowp");
        assert!(report.steps.len() <= sets.dictionary.len());
    }

    #[test]
    fn solve_records_shrinking_set() {
        let sets = WordSets::embedded().unwrap();
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());
        let plan = SolveConfig::new("abele".to_string()).plan(&sets.dictionary).unwrap();
        let words = sets.dictionary.words();
        let solver = Solver::new(&engine, words, words, plan);

        let report = solve_word("abele", &sets.dictionary, &solver).unwrap();
        let mut before = words.len();
        for step in &report.steps {
            assert!(step.remaining <= before);
            before = step.remaining;
        }
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let sets = WordSets::embedded().unwrap();
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());
        let words = sets.dictionary.words();
        let solver = Solver::new(&engine, words, words, StrategyPlan::all_optimal());

        assert_eq!(
            solve_word("qqqqq", &sets.dictionary, &solver),
            Err(SolveError::UnknownWord("qqqqq".to_string()))
        );
        assert!(solve_word("toolong", &sets.dictionary, &solver).is_err());
    }

    #[test]
    fn config_overrides_plan() {
        let sets = WordSets::embedded().unwrap();
        let mut config = SolveConfig::new("tangy".to_string());
        config.start = Some("crane".to_string());
        config.alternates = true;
        config.step_limit = Some(MAX_STEPS);

        let plan = config.plan(&sets.dictionary).unwrap();
        assert_eq!(
            plan.policy_for(0),
            &StepPolicy::FixedWord(sets.dictionary.lookup("crane"))
        );
        assert_eq!(plan.policy_for(1), &StepPolicy::ComputedOptimalWithAlternates);
        assert_eq!(plan.step_limit(), MAX_STEPS);

        config.start = Some("qqqqq".to_string());
        assert!(config.plan(&sets.dictionary).is_err());
    }
}
