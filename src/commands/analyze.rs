//! Word analysis commands
//!
//! How a single guess partitions a possibility set, and which guess
//! partitions it best.

use crate::core::{Pattern, Word};
use crate::solver::minimax::{Selection, group_by_pattern, select_optimal_guess_with_alternates};
use crate::solver::{FeedbackEngine, SolveError};
use crate::wordlists::Dictionary;

/// How one guess splits a possibility set
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    /// Number of distinct feedback patterns
    pub buckets: usize,
    pub largest_partition: usize,
    /// Expected possibilities left if the secret is uniformly random
    pub expected_remaining: f64,
    /// Largest partitions, biggest first
    pub top_partitions: Vec<(Pattern, usize)>,
}

/// Partitions reported in `top_partitions`
const TOP_PARTITIONS: usize = 5;

/// Analyze how a word partitions a set of possibilities
///
/// # Errors
///
/// Returns `SolveError::UnknownWord` if the word is not in the dictionary.
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    engine: &FeedbackEngine,
    possibilities: &[Word],
) -> Result<AnalysisResult, SolveError> {
    let guess = dictionary.lookup(word);
    if !guess.is_valid() {
        return Err(SolveError::UnknownWord(word.to_string()));
    }

    let groups = group_by_pattern(engine, guess, possibilities);
    let total = possibilities.len();

    let mut partitions: Vec<(Pattern, usize)> = groups.into_iter().collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let expected_remaining = if total == 0 {
        0.0
    } else {
        partitions
            .iter()
            .map(|&(_, size)| (size * size) as f64)
            .sum::<f64>()
            / total as f64
    };

    Ok(AnalysisResult {
        word: guess,
        total_candidates: total,
        buckets: partitions.len(),
        largest_partition: partitions.first().map_or(0, |&(_, size)| size),
        expected_remaining,
        top_partitions: partitions.into_iter().take(TOP_PARTITIONS).collect(),
    })
}

/// The computed-optimal opening guess against a possibility set
///
/// # Errors
///
/// Returns `SolveError::NoGuessAvailable` if the pool or possibility set is empty.
pub fn optimal_first_word(
    engine: &FeedbackEngine,
    pool: &[Word],
    possibilities: &[Word],
) -> Result<Selection, SolveError> {
    select_optimal_guess_with_alternates(engine, possibilities, pool)
        .ok_or(SolveError::NoGuessAvailable { step: 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::minimax::largest_partition;
    use crate::wordlists::WordSets;

    #[test]
    fn analyze_valid_word() {
        let sets = WordSets::embedded().unwrap();
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());

        let result = analyze_word("crane", &sets.dictionary, &engine, &sets.answers).unwrap();
        assert_eq!(result.word.decode(), "crane");
        assert_eq!(result.total_candidates, sets.answers.len());
        assert!(result.buckets > 1);
        assert_eq!(
            result.largest_partition,
            largest_partition(&engine, result.word, &sets.answers)
        );
        assert_eq!(result.top_partitions[0].1, result.largest_partition);
        assert!(result.top_partitions.len() <= TOP_PARTITIONS);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.largest_partition as f64);
    }

    #[test]
    fn analyze_unknown_word() {
        let sets = WordSets::embedded().unwrap();
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());
        assert!(analyze_word("qqqqq", &sets.dictionary, &engine, &sets.answers).is_err());
    }

    #[test]
    fn analyze_four_words() {
        let dictionary = Dictionary::from_texts(["abcde", "fghij", "klmno", "pqrst"]).unwrap();
        let engine = FeedbackEngine::for_dictionary(dictionary.len());

        let result = analyze_word("abcde", &dictionary, &engine, dictionary.words()).unwrap();
        assert_eq!(result.buckets, 2);
        assert_eq!(result.largest_partition, 3);
        assert_eq!(result.top_partitions[0], (Pattern::ALL_MISS, 3));
        assert_eq!(result.top_partitions[1], (Pattern::PERFECT, 1));
        assert!((result.expected_remaining - 2.5).abs() < 1e-12);
    }

    #[test]
    fn first_word_is_minimax_over_source() {
        let dictionary = Dictionary::from_texts(["abcde", "fghij", "klmno", "pqrst"]).unwrap();
        let engine = FeedbackEngine::for_dictionary(dictionary.len());
        let words = dictionary.words();

        let selection = optimal_first_word(&engine, words, words).unwrap();
        assert_eq!(selection.guess.decode(), "fghij");
        assert_eq!(selection.largest_partition, 3);
        assert!(optimal_first_word(&engine, &[], words).is_err());
    }
}
