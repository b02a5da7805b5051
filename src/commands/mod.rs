//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod rank_starts;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word, optimal_first_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use rank_starts::{
    FIRST_STEP_CANDIDATES, RankConfig, SECOND_STEP_CANDIDATES, StartRanking, rank_start_words,
};
pub use solve::{SolveConfig, solve_word};
pub use test_all::{
    TestAllConfig, TestAllStatistics, idealized_average, print_test_all_statistics, run_test_all,
};
