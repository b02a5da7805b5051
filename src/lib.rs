//! Wordle Minimax Solver
//!
//! A Wordle solver built on bit-packed words, cached feedback patterns and
//! minimax partitioning, driven by a per-step strategy plan.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::Pattern;
//! use wordle_minimax::solver::{FeedbackEngine, Solver, StrategyPlan};
//! use wordle_minimax::wordlists::WordSets;
//!
//! let sets = WordSets::embedded().unwrap();
//! let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());
//!
//! let guess = sets.dictionary.lookup("crane");
//! let target = sets.dictionary.lookup("slate");
//! let pattern = engine.compute(target, guess);
//! assert_eq!(pattern, Pattern::calculate(target, guess));
//!
//! let plan = StrategyPlan::standard(&sets.dictionary);
//! let solver = Solver::new(&engine, sets.dictionary.words(), sets.dictionary.words(), plan);
//! let report = solver.solve(target).unwrap();
//! assert_eq!(report.guesses().last(), Some(target));
//! ```

// Packed words and feedback patterns
pub mod core;

// Feedback engine, filtering, minimax and the step solver
pub mod solver;

// Dictionary and embedded word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive feedback prompt
pub mod interactive;
