//! Minimax-based guess selection
//!
//! Picks the guess from a pool that minimizes the largest partition of the
//! remaining possibilities. Ties go to the highest rare-letter score, then to
//! pool order.

use super::calculator::{largest_partition, largest_partition_within};
use crate::core::Word;
use crate::solver::FeedbackEngine;
use log::debug;

/// Below this many possibilities the first one is guessed directly
pub const SHORTCUT_THRESHOLD: usize = 3;

/// Result of a guess selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub guess: Word,
    /// Worst-case number of possibilities left after the guess
    pub largest_partition: usize,
    /// Other pool words that tied on `largest_partition`, in pool order
    pub alternates: Vec<Word>,
}

/// Select the guess minimizing the worst-case remaining possibilities
///
/// The pool is usually the whole dictionary, so the guess may be a word already
/// known not to be the secret. Returns `None` if there is nothing to choose.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::FeedbackEngine;
/// use wordle_minimax::solver::minimax::select_optimal_guess;
///
/// let pool: Vec<Word> = ["abcde", "fghij", "klmno", "pqrst"]
///     .iter()
///     .enumerate()
///     .map(|(i, t)| Word::encode(t, i as u16))
///     .collect();
/// let engine = FeedbackEngine::for_dictionary(pool.len());
///
/// let guess = select_optimal_guess(&engine, &pool[1..], &pool);
/// assert_eq!(guess.map(Word::decode).as_deref(), Some("fghij"));
/// ```
#[must_use]
pub fn select_optimal_guess(
    engine: &FeedbackEngine,
    remaining: &[Word],
    pool: &[Word],
) -> Option<Word> {
    select_optimal_guess_with_alternates(engine, remaining, pool).map(|selection| selection.guess)
}

/// Like [`select_optimal_guess`], also reporting the partition size and tied words
#[must_use]
pub fn select_optimal_guess_with_alternates(
    engine: &FeedbackEngine,
    remaining: &[Word],
    pool: &[Word],
) -> Option<Selection> {
    if remaining.len() < SHORTCUT_THRESHOLD {
        let &first = remaining.first()?;
        return Some(Selection {
            guess: first,
            largest_partition: largest_partition(engine, first, remaining),
            alternates: Vec::new(),
        });
    }

    let mut best = usize::MAX;
    let mut tied: Vec<Word> = Vec::new();

    for &guess in pool {
        let Some(size) = largest_partition_within(engine, guess, remaining, best) else {
            continue;
        };
        if size < best {
            best = size;
            tied.clear();
        }
        tied.push(guess);
    }

    let chosen = tied.iter().copied().reduce(|kept, word| {
        if word.rare_letter_score() > kept.rare_letter_score() {
            word
        } else {
            kept
        }
    })?;
    let alternates: Vec<Word> = tied.into_iter().filter(|&w| w != chosen).collect();

    debug!(
        "selected {chosen} from {} guesses against {} possibilities: largest partition {best}, {} tied",
        pool.len(),
        remaining.len(),
        alternates.len()
    );
    engine.log_cache_stats();

    Some(Selection {
        guess: chosen,
        largest_partition: best,
        alternates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::minimax::group_by_pattern;
    use crate::wordlists::WordSets;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::encode(t, i as u16))
            .collect()
    }

    #[test]
    fn selects_lowest_largest_partition() {
        let w = words(&["zzzzz", "crane", "slate", "irate", "crate", "grate"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        let selection = select_optimal_guess_with_alternates(&engine, &w[2..], &w[..2]).unwrap();
        assert_eq!(selection.guess.decode(), "crane");
        assert!(selection.largest_partition < 4);
    }

    #[test]
    fn fewer_than_three_takes_first() {
        let w = words(&["crane", "slate", "irate"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        assert_eq!(select_optimal_guess(&engine, &w[1..], &w), Some(w[1]));
        assert_eq!(select_optimal_guess(&engine, &w[2..], &w), Some(w[2]));
        assert_eq!(select_optimal_guess(&engine, &[], &w), None);
    }

    #[test]
    fn empty_pool_returns_none() {
        let w = words(&["aaaaa", "bbbbb", "ccccc"]);
        let engine = FeedbackEngine::for_dictionary(w.len());
        assert_eq!(select_optimal_guess(&engine, &w, &[]), None);
    }

    #[test]
    fn tie_prefers_rare_letters() {
        let w = words(&["aaaaa", "bbbbb", "ccccc", "ddddd", "zzzzz"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        // both guesses miss everything, so both leave all three
        let selection = select_optimal_guess_with_alternates(&engine, &w[..3], &w[3..]).unwrap();
        assert_eq!(selection.guess.decode(), "zzzzz");
        assert_eq!(selection.largest_partition, 3);
        assert_eq!(selection.alternates, vec![w[3]]);
    }

    #[test]
    fn tie_without_rare_letters_keeps_pool_order() {
        let w = words(&["aaaaa", "bbbbb", "ccccc", "qqqqq", "ddddd"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        let selection = select_optimal_guess_with_alternates(&engine, &w[..3], &w[3..]).unwrap();
        assert_eq!(selection.guess.decode(), "qqqqq");
        assert_eq!(selection.alternates, vec![w[4]]);
    }

    #[test]
    fn minimax_guarantee_by_brute_force() {
        let sets = WordSets::embedded().unwrap();
        let pool: Vec<Word> = sets.dictionary.words().iter().step_by(61).copied().collect();
        assert!((10..=20).contains(&pool.len()));
        let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());

        for remaining in [&pool[..], &pool[3..12], &pool[5..9]] {
            let selection = select_optimal_guess_with_alternates(&engine, remaining, &pool).unwrap();
            let worst_case = |guess: Word| {
                group_by_pattern(&engine, guess, remaining)
                    .values()
                    .max()
                    .copied()
                    .unwrap_or(0)
            };

            assert_eq!(worst_case(selection.guess), selection.largest_partition);
            for &other in &pool {
                assert!(selection.largest_partition <= worst_case(other));
            }
            for &alternate in &selection.alternates {
                assert_eq!(worst_case(alternate), selection.largest_partition);
                assert!(alternate.rare_letter_score() <= selection.guess.rare_letter_score());
            }
        }
    }

    #[test]
    fn four_word_scenario() {
        let w = words(&["abcde", "fghij", "klmno", "pqrst"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        let remaining = crate::solver::narrow_possibilities(&w, w[0], engine.compute(w[1], w[0]));
        assert_eq!(remaining, w[1..].to_vec());

        // each remaining word splits itself off; fghij carries g and j
        let selection = select_optimal_guess_with_alternates(&engine, &remaining, &w).unwrap();
        assert_eq!(selection.guess.decode(), "fghij");
        assert_eq!(selection.largest_partition, 2);
        assert_eq!(selection.alternates, vec![w[2], w[3]]);
    }
}
