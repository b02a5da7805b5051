//! Minimax guess selection
//!
//! Implements worst-case minimization over feedback partitions.

mod calculator;
mod selector;

pub use calculator::{group_by_pattern, largest_partition, largest_partition_within};
pub use selector::{
    SHORTCUT_THRESHOLD, Selection, select_optimal_guess, select_optimal_guess_with_alternates,
};
