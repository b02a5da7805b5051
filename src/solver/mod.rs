//! Wordle solving algorithms
//!
//! Feedback computation, possibility narrowing, minimax guess selection and the
//! step-by-step solver that ties them together.

mod engine;
mod error;
mod feedback;
mod filter;
pub mod minimax;
mod overrides;
pub mod strategy;

pub use engine::{Advance, SolveOutcome, SolveReport, Solver, StepRecord};
pub use error::SolveError;
pub use feedback::{DENSE_CACHE_LIMIT, FeedbackCache, FeedbackEngine};
pub use filter::{is_consistent, narrow_checked, narrow_possibilities};
pub use overrides::CorrectionTable;
pub use strategy::{DEFAULT_STEP_LIMIT, MAX_STEPS, STANDARD_OPENER, StepPolicy, StrategyPlan};
