//! Possibility narrowing
//!
//! Decides whether a word could still be the secret given one observed
//! (guess, pattern) pair. The check re-derives the feedback rules directly and
//! stops at the first contradiction instead of building a whole pattern.

use super::error::SolveError;
use crate::core::{Match, Pattern, WORD_LENGTH, Word};

/// True iff playing `guess` against `candidate` would produce `observed`
///
/// Invalid words are never consistent.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Pattern, Word};
/// use wordle_minimax::solver::is_consistent;
///
/// let guess = Word::encode("crane", 0);
/// let observed = Pattern::from_digits("00222").unwrap();
///
/// assert!(is_consistent(Word::encode("plane", 1), guess, observed));
/// assert!(!is_consistent(Word::encode("crane", 2), guess, observed));
/// ```
#[must_use]
#[allow(clippy::needless_range_loop)]
pub fn is_consistent(candidate: Word, guess: Word, observed: Pattern) -> bool {
    if !candidate.is_valid() || !guess.is_valid() {
        return false;
    }

    let mut target_left = candidate.letters();
    let guess_letters = guess.letters();
    let expected = observed.matches();

    // Hits must line up exactly in both directions
    for i in 0..WORD_LENGTH {
        let same = guess_letters[i] == target_left[i];
        if same != (expected[i] == Match::Hit) {
            return false;
        }
        if same {
            target_left[i] = 0;
        }
    }

    for i in 0..WORD_LENGTH {
        if expected[i] == Match::Hit {
            continue;
        }
        let available = target_left.iter().position(|&l| l == guess_letters[i]);
        match (expected[i], available) {
            (Match::Partial, Some(t)) => target_left[t] = 0,
            (Match::Miss, None) => {}
            _ => return false,
        }
    }

    true
}

/// Keep the words consistent with one observation, in their original order
#[must_use]
pub fn narrow_possibilities(set: &[Word], guess: Word, observed: Pattern) -> Vec<Word> {
    set.iter()
        .copied()
        .filter(|&candidate| is_consistent(candidate, guess, observed))
        .collect()
}

/// Like [`narrow_possibilities`], but an empty result is an error
///
/// An empty set means the feedback contradicts every remaining word.
///
/// # Errors
/// Returns `SolveError::EmptyPossibilitySet` when no word survives.
pub fn narrow_checked(
    set: &[Word],
    guess: Word,
    observed: Pattern,
) -> Result<Vec<Word>, SolveError> {
    let narrowed = narrow_possibilities(set, guess, observed);
    if narrowed.is_empty() {
        return Err(SolveError::EmptyPossibilitySet {
            guess,
            pattern: observed,
        });
    }
    Ok(narrowed)
}
