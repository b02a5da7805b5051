//! Per-step guess policies
//!
//! A [`StrategyPlan`] assigns one [`StepPolicy`] to each of the first
//! [`MAX_STEPS`] guesses, plus the policy used for any guess after that.

use super::error::SolveError;
use super::overrides::CorrectionTable;
use crate::core::Word;
use crate::wordlists::Dictionary;
use log::warn;
use std::fmt;

/// Guesses allowed before a solve counts as failed
pub const MAX_STEPS: usize = 6;

/// Guesses an offline solve may play before giving up
pub const DEFAULT_STEP_LIMIT: usize = 12;

/// First word of the standard plan
pub const STANDARD_OPENER: &str = "stowp";

/// How the guess for one step is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPolicy {
    /// Minimax over the guess pool
    ComputedOptimal,
    /// Minimax, also reporting the other words that tied
    ComputedOptimalWithAlternates,
    /// Always play this word
    FixedWord(Word),
    /// Play the word supplied through `Solver::set_input_word`
    ExternallySupplied,
    /// Play the first remaining possibility
    TakeFirstRemaining,
    /// Consult the override table, otherwise minimax
    Corrective(CorrectionTable),
}

impl StepPolicy {
    /// Parse a policy name
    ///
    /// Supported names: "optimal", "alternates", "input", "first",
    /// "corrective", or "word:<text>" for a fixed word.
    ///
    /// # Errors
    /// Returns `SolveError::UnknownWord` for an unknown name or a fixed word
    /// that is not in the dictionary.
    pub fn from_name(name: &str, dictionary: &Dictionary) -> Result<Self, SolveError> {
        match name {
            "optimal" => Ok(Self::ComputedOptimal),
            "alternates" => Ok(Self::ComputedOptimalWithAlternates),
            "input" => Ok(Self::ExternallySupplied),
            "first" => Ok(Self::TakeFirstRemaining),
            "corrective" => Ok(Self::Corrective(CorrectionTable::standard(dictionary))),
            _ => {
                let text = name.strip_prefix("word:").unwrap_or(name);
                let word = dictionary.lookup(text);
                if word.is_valid() {
                    Ok(Self::FixedWord(word))
                } else {
                    Err(SolveError::UnknownWord(text.to_string()))
                }
            }
        }
    }

    /// Short name used in traces
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ComputedOptimal => "optimal",
            Self::ComputedOptimalWithAlternates => "optimal+alts",
            Self::FixedWord(_) => "fixed",
            Self::ExternallySupplied => "input",
            Self::TakeFirstRemaining => "first",
            Self::Corrective(_) => "corrective",
        }
    }
}

impl fmt::Display for StepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedWord(word) => write!(f, "fixed({word})"),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Policies for a whole solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyPlan {
    steps: [StepPolicy; MAX_STEPS],
    after_plan: StepPolicy,
    starting_step: usize,
    step_limit: usize,
}

impl StrategyPlan {
    /// Computed-optimal at every step
    #[must_use]
    pub fn all_optimal() -> Self {
        Self {
            steps: std::array::from_fn(|_| StepPolicy::ComputedOptimal),
            after_plan: StepPolicy::ComputedOptimal,
            starting_step: 0,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// The tuned plan: fixed opener, minimax, corrective table, minimax twice,
    /// then the first remaining word
    ///
    /// If the opener is missing from the dictionary, step 1 is computed instead.
    #[must_use]
    pub fn standard(dictionary: &Dictionary) -> Self {
        let opener = dictionary.lookup(STANDARD_OPENER);
        let first = if opener.is_valid() {
            StepPolicy::FixedWord(opener)
        } else {
            warn!("opener '{STANDARD_OPENER}' not in dictionary, computing step 1");
            StepPolicy::ComputedOptimal
        };

        Self::all_optimal()
            .with_step(1, first)
            .with_step(3, StepPolicy::Corrective(CorrectionTable::standard(dictionary)))
            .with_step(6, StepPolicy::TakeFirstRemaining)
    }

    /// Replace the policy for a 1-based step
    ///
    /// Steps past `MAX_STEPS` are governed by [`with_after_plan`](Self::with_after_plan);
    /// out-of-range steps are ignored with a warning.
    #[must_use]
    pub fn with_step(mut self, step: usize, policy: StepPolicy) -> Self {
        match step.checked_sub(1).and_then(|i| self.steps.get_mut(i)) {
            Some(slot) => *slot = policy,
            None => warn!("ignoring policy for step {step}, plan covers steps 1-{MAX_STEPS}"),
        }
        self
    }

    /// Report tied alternates wherever a plain computed-optimal step is planned
    #[must_use]
    pub fn with_alternates(mut self) -> Self {
        for policy in self.steps.iter_mut().chain(std::iter::once(&mut self.after_plan)) {
            if *policy == StepPolicy::ComputedOptimal {
                *policy = StepPolicy::ComputedOptimalWithAlternates;
            }
        }
        self
    }

    /// Policy for every guess after `MAX_STEPS`
    #[must_use]
    pub fn with_after_plan(mut self, policy: StepPolicy) -> Self {
        self.after_plan = policy;
        self
    }

    /// Begin solves at a later 1-based step; earlier steps count as used
    #[must_use]
    pub fn with_starting_step(mut self, step: usize) -> Self {
        self.starting_step = step.saturating_sub(1);
        self
    }

    /// Most guesses an offline solve may play before stopping
    ///
    /// Counted from the starting step, so a late start still gets the full limit.
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = limit.max(1);
        self
    }

    /// Policy for a 0-based step index
    #[must_use]
    pub fn policy_for(&self, step_index: usize) -> &StepPolicy {
        self.steps.get(step_index).unwrap_or(&self.after_plan)
    }

    /// 0-based index of the first step
    #[must_use]
    pub const fn starting_step(&self) -> usize {
        self.starting_step
    }

    #[must_use]
    pub const fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// True if any step asks for an externally supplied word
    #[must_use]
    pub fn uses_input_word(&self) -> bool {
        self.steps
            .iter()
            .chain(std::iter::once(&self.after_plan))
            .any(|p| matches!(p, StepPolicy::ExternallySupplied))
    }
}

impl Default for StrategyPlan {
    fn default() -> Self {
        Self::all_optimal()
    }
}
