//! Step-by-step solver
//!
//! Drives a [`StrategyPlan`] against either a known target (offline) or
//! operator-supplied feedback (interactive), narrowing the possibility set after
//! every guess.

use super::error::SolveError;
use super::feedback::FeedbackEngine;
use super::filter::narrow_checked;
use super::minimax::select_optimal_guess_with_alternates;
use super::strategy::{MAX_STEPS, StepPolicy, StrategyPlan};
use crate::core::{Pattern, Word};
use log::{debug, warn};

/// How an offline solve ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Target guessed within `MAX_STEPS`
    Solved(usize),
    /// Target guessed, but only after `MAX_STEPS`
    Failed(usize),
    /// Step limit reached without guessing the target
    Abandoned(usize),
}

impl SolveOutcome {
    fn found_at(steps: usize) -> Self {
        if steps > MAX_STEPS {
            Self::Failed(steps)
        } else {
            Self::Solved(steps)
        }
    }

    /// Steps used, counting any skipped by a later starting step
    #[must_use]
    pub const fn steps(self) -> usize {
        match self {
            Self::Solved(n) | Self::Failed(n) | Self::Abandoned(n) => n,
        }
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::Solved(_))
    }
}

/// One guess in a solve trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based step number
    pub step: usize,
    pub policy: String,
    pub guess: Word,
    /// Feedback for the guess; `None` when the guess was the target
    pub pattern: Option<Pattern>,
    /// Possibilities left after narrowing
    pub remaining: usize,
    /// Tied words, filled only by the with-alternates policy
    pub alternates: Vec<Word>,
}

/// Full trace of an offline solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub target: Word,
    pub steps: Vec<StepRecord>,
    pub outcome: SolveOutcome,
}

impl SolveReport {
    /// Guesses in play order
    pub fn guesses(&self) -> impl Iterator<Item = Word> + '_ {
        self.steps.iter().map(|record| record.guess)
    }
}

/// Result of feeding one pattern to an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Play this word next
    Guess(Word),
    /// The perfect pattern arrived at this step
    Solved(usize),
}

struct Choice {
    guess: Word,
    alternates: Vec<Word>,
}

struct Session {
    remaining: Vec<Word>,
    history: Vec<Pattern>,
    step: usize,
    guess: Word,
    finished: bool,
}

/// Wordle solver
///
/// Borrows the feedback engine and word lists; owns the plan and any
/// interactive session state.
pub struct Solver<'a> {
    engine: &'a FeedbackEngine,
    pool: &'a [Word],
    source: &'a [Word],
    plan: StrategyPlan,
    input_word: Word,
    session: Option<Session>,
}

impl<'a> Solver<'a> {
    /// Create a solver
    ///
    /// # Parameters
    /// - `engine`: Feedback engine sized for the dictionary the words come from
    /// - `pool`: Words that may be guessed by the computed policies
    /// - `source`: Starting possibility set for every solve
    /// - `plan`: Per-step policies
    #[must_use]
    pub const fn new(
        engine: &'a FeedbackEngine,
        pool: &'a [Word],
        source: &'a [Word],
        plan: StrategyPlan,
    ) -> Self {
        Self {
            engine,
            pool,
            source,
            plan,
            input_word: Word::INVALID,
            session: None,
        }
    }

    /// Word played by `ExternallySupplied` steps
    pub fn set_input_word(&mut self, word: Word) {
        self.input_word = word;
    }

    /// Solve for a known target
    ///
    /// # Errors
    /// Returns `SolveError::UnknownWord` for an invalid target,
    /// `EmptyPossibilitySet` if the target is not in the possibility source,
    /// or `NoGuessAvailable` if a policy cannot produce a guess.
    pub fn solve(&self, target: Word) -> Result<SolveReport, SolveError> {
        if !target.is_valid() {
            return Err(SolveError::UnknownWord(target.to_string()));
        }

        let mut remaining = self.source.to_vec();
        let mut history = Vec::new();
        let mut records = Vec::new();
        let mut step = self.plan.starting_step();

        loop {
            let policy = self.plan.policy_for(step);
            step += 1;
            let choice = self.choose_guess(policy, &remaining, &history, step)?;

            if choice.guess == target {
                debug!("step {step}: {} ({policy}) is the target", choice.guess);
                records.push(StepRecord {
                    step,
                    policy: policy.to_string(),
                    guess: choice.guess,
                    pattern: None,
                    remaining: remaining.len(),
                    alternates: choice.alternates,
                });
                return Ok(SolveReport {
                    target,
                    steps: records,
                    outcome: SolveOutcome::found_at(step),
                });
            }

            let pattern = self.engine.compute(target, choice.guess);
            remaining = narrow_checked(&remaining, choice.guess, pattern)?;
            history.push(pattern);
            debug!(
                "step {step}: {} ({policy}) -> {pattern}, {} remaining",
                choice.guess,
                remaining.len()
            );

            records.push(StepRecord {
                step,
                policy: policy.to_string(),
                guess: choice.guess,
                pattern: Some(pattern),
                remaining: remaining.len(),
                alternates: choice.alternates,
            });

            if records.len() >= self.plan.step_limit() {
                debug!("giving up on {target} at step {step}");
                return Ok(SolveReport {
                    target,
                    steps: records,
                    outcome: SolveOutcome::Abandoned(step),
                });
            }
        }
    }

    /// Start an interactive session and return the first word to play
    ///
    /// Any previous session is discarded.
    ///
    /// # Errors
    /// Returns `SolveError::NoGuessAvailable` if the first policy yields nothing.
    pub fn begin(&mut self) -> Result<Word, SolveError> {
        let remaining = self.source.to_vec();
        let step = self.plan.starting_step() + 1;
        let choice = self.choose_guess(self.plan.policy_for(step - 1), &remaining, &[], step)?;

        debug!("session started, step {step}: {}", choice.guess);
        self.session = Some(Session {
            remaining,
            history: Vec::new(),
            step,
            guess: choice.guess,
            finished: false,
        });
        Ok(choice.guess)
    }

    /// Apply the operator's feedback for the current word
    ///
    /// The perfect pattern ends the session. On error the session is left as it
    /// was, so corrected feedback can be entered.
    ///
    /// # Errors
    /// Returns `SolveError::SessionFinished` if no session is running,
    /// `EmptyPossibilitySet` if the feedback contradicts every remaining word,
    /// or `NoGuessAvailable` if the next policy yields nothing.
    pub fn advance(&mut self, pattern: Pattern) -> Result<Advance, SolveError> {
        let session = match self.session.as_ref() {
            Some(session) if !session.finished => session,
            _ => return Err(SolveError::SessionFinished),
        };

        if pattern.is_perfect() {
            let step = session.step;
            debug!("session solved at step {step}");
            if let Some(session) = self.session.as_mut() {
                session.finished = true;
            }
            return Ok(Advance::Solved(step));
        }

        let remaining = narrow_checked(&session.remaining, session.guess, pattern)?;
        let mut history = session.history.clone();
        history.push(pattern);
        let step = session.step + 1;
        let choice = self.choose_guess(self.plan.policy_for(step - 1), &remaining, &history, step)?;

        debug!(
            "step {step}: {} after {pattern}, {} remaining",
            choice.guess,
            remaining.len()
        );
        self.session = Some(Session {
            remaining,
            history,
            step,
            guess: choice.guess,
            finished: false,
        });
        Ok(Advance::Guess(choice.guess))
    }

    /// Possibilities left in the running session
    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        self.session.as_ref().map_or(&[], |s| s.remaining.as_slice())
    }

    /// 1-based step of the word currently in play
    #[must_use]
    pub fn current_step(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.step)
    }

    fn choose_guess(
        &self,
        policy: &StepPolicy,
        remaining: &[Word],
        history: &[Pattern],
        step: usize,
    ) -> Result<Choice, SolveError> {
        let choice = match policy {
            StepPolicy::ComputedOptimal => self.optimal(remaining, false),
            StepPolicy::ComputedOptimalWithAlternates => self.optimal(remaining, true),
            StepPolicy::FixedWord(word) => Some(Choice::plain(*word)),
            StepPolicy::ExternallySupplied => Some(Choice::plain(self.input_word)),
            StepPolicy::TakeFirstRemaining => remaining.first().copied().map(Choice::plain),
            StepPolicy::Corrective(table) => {
                // the table is keyed on steps 1 and 2, unknown after a late start
                let known = if self.plan.starting_step() == 0 {
                    history
                } else {
                    &[]
                };
                table
                    .lookup(known)
                    .map(Choice::plain)
                    .or_else(|| self.optimal(remaining, false))
            }
        };

        let choice = match choice {
            Some(choice) if choice.guess.is_valid() => Some(choice),
            _ => {
                warn!("step {step}: {policy} gave no usable word, computing instead");
                self.optimal(remaining, false)
            }
        };
        choice.ok_or(SolveError::NoGuessAvailable { step })
    }

    fn optimal(&self, remaining: &[Word], keep_alternates: bool) -> Option<Choice> {
        select_optimal_guess_with_alternates(self.engine, remaining, self.pool).map(|selection| {
            Choice {
                guess: selection.guess,
                alternates: if keep_alternates {
                    selection.alternates
                } else {
                    Vec::new()
                },
            }
        })
    }
}

impl Choice {
    const fn plain(guess: Word) -> Self {
        Self {
            guess,
            alternates: Vec::new(),
        }
    }
}
