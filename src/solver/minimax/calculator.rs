//! Minimax worst-case calculation for Wordle patterns
//!
//! Given a guess and a possibility set, partitions the set by the feedback each
//! possible secret would give and measures the largest partition.

use crate::core::{PATTERN_SPACE, Pattern, Word};
use crate::solver::FeedbackEngine;
use rustc_hash::FxHashMap;

/// Group possibilities by the pattern `guess` would produce against each of them
///
/// Every possibility lands in exactly one bucket, so the counts sum to the set size.
#[must_use]
pub fn group_by_pattern(
    engine: &FeedbackEngine,
    guess: Word,
    possibilities: &[Word],
) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &possibility in possibilities {
        let pattern = engine.compute(possibility, guess);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Size of the largest partition `guess` leaves (its worst case)
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::FeedbackEngine;
/// use wordle_minimax::solver::minimax::largest_partition;
///
/// let engine = FeedbackEngine::for_dictionary(3);
/// let possibilities = [Word::encode("aaaaa", 0), Word::encode("bbbbb", 1)];
///
/// assert_eq!(largest_partition(&engine, Word::encode("aaaaa", 0), &possibilities), 1);
/// assert_eq!(largest_partition(&engine, Word::encode("zzzzz", 2), &possibilities), 2);
/// ```
#[must_use]
pub fn largest_partition(engine: &FeedbackEngine, guess: Word, possibilities: &[Word]) -> usize {
    largest_partition_within(engine, guess, possibilities, usize::MAX).unwrap_or(possibilities.len())
}

/// Largest partition, or `None` as soon as some partition grows past `limit`
///
/// Lets the selector drop a guess that already does worse than the best seen.
#[must_use]
pub fn largest_partition_within(
    engine: &FeedbackEngine,
    guess: Word,
    possibilities: &[Word],
    limit: usize,
) -> Option<usize> {
    let mut buckets = [0usize; PATTERN_SPACE];
    let mut largest = 0;

    for &possibility in possibilities {
        let bucket = &mut buckets[engine.compute(possibility, guess).bucket()];
        *bucket += 1;
        if *bucket > largest {
            largest = *bucket;
            if largest > limit {
                return None;
            }
        }
    }

    Some(largest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSets;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::encode(t, i as u16))
            .collect()
    }

    #[test]
    fn perfect_split() {
        let w = words(&["slate", "zzzzz"]);
        let engine = FeedbackEngine::for_dictionary(w.len());
        assert_eq!(largest_partition(&engine, w[0], &w), 1);
    }

    #[test]
    fn all_same_pattern() {
        let w = words(&["aaaaa", "bbbbb", "ccccc", "zzzzz"]);
        let engine = FeedbackEngine::for_dictionary(w.len());
        assert_eq!(largest_partition(&engine, w[3], &w[..3]), 3);
    }

    #[test]
    fn empty_possibilities() {
        let engine = FeedbackEngine::for_dictionary(1);
        assert_eq!(largest_partition(&engine, Word::encode("crane", 0), &[]), 0);
        assert!(group_by_pattern(&engine, Word::encode("crane", 0), &[]).is_empty());
    }

    #[test]
    fn partitions_conserve_set_size() {
        let sets = WordSets::embedded().unwrap();
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());

        for &guess in sets.dictionary.words().iter().step_by(50) {
            let groups = group_by_pattern(&engine, guess, &sets.answers);
            assert_eq!(groups.values().sum::<usize>(), sets.answers.len());
            assert_eq!(
                groups.values().max().copied().unwrap_or(0),
                largest_partition(&engine, guess, &sets.answers)
            );
        }
    }

    #[test]
    fn within_limit_stops_early() {
        let w = words(&["aaaaa", "bbbbb", "ccccc", "zzzzz"]);
        let engine = FeedbackEngine::for_dictionary(w.len());
        assert_eq!(largest_partition_within(&engine, w[3], &w[..3], 2), None);
        assert_eq!(largest_partition_within(&engine, w[3], &w[..3], 3), Some(3));
        // bbbbb and ccccc share the all-miss bucket
        assert_eq!(largest_partition_within(&engine, w[0], &w[..3], 1), None);
        assert_eq!(largest_partition_within(&engine, w[0], &w[..3], 2), Some(2));
    }
}
