//! Wordle feedback pattern calculation and representation
//!
//! A pattern packs one 2-bit field per letter position, least-significant position
//! first:
//! - 0 = Miss (letter not in the target, or all its occurrences used up)
//! - 1 = Partial (letter in the target, wrong position)
//! - 2 = Hit (letter in the correct position)
//!
//! Bit 11 is a marker set on every computed pattern, so the all-miss pattern (2048)
//! never collides with 0, which the feedback cache reserves for "not computed".

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Width of one per-position feedback field
pub const BITS_PER_MATCH: u32 = 2;

/// Marker bit carried by every computed pattern
pub const COMPUTED_MARKER: u16 = 0b1000_0000_0000;

/// Number of distinct values the position fields can take, used for bucketing
pub const PATTERN_SPACE: usize = 1 << (WORD_LENGTH as u32 * BITS_PER_MATCH);

const FIELD_MASK: u16 = 0b11;
const FIELDS_MASK: u16 = (1 << (WORD_LENGTH as u32 * BITS_PER_MATCH)) - 1;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Match {
    Miss = 0,
    Partial = 1,
    Hit = 2,
}

impl Match {
    const fn from_field(field: u16) -> Option<Self> {
        match field {
            0 => Some(Self::Miss),
            1 => Some(Self::Partial),
            2 => Some(Self::Hit),
            _ => None,
        }
    }

    /// Operator digit for this outcome (`0`, `1` or `2`)
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Miss => '0',
            Self::Partial => '1',
            Self::Hit => '2',
        }
    }
}

/// Feedback pattern for a guess against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u16);

impl Pattern {
    /// All hits (perfect match)
    pub const PERFECT: Self = Self::from_matches([Match::Hit; WORD_LENGTH]);

    /// All misses
    pub const ALL_MISS: Self = Self(COMPUTED_MARKER);

    /// Build a pattern from per-position outcomes, setting the computed marker
    #[must_use]
    pub const fn from_matches(matches: [Match; WORD_LENGTH]) -> Self {
        let mut value = COMPUTED_MARKER;
        let mut i = 0;
        while i < WORD_LENGTH {
            value |= (matches[i] as u16) << (i as u32 * BITS_PER_MATCH);
            i += 1;
        }
        Self(value)
    }

    /// Accept a raw bit pattern if it is a well-formed computed pattern
    ///
    /// Rejects values without the marker, with a field set to 3, or with stray bits.
    #[must_use]
    pub const fn from_raw(value: u16) -> Option<Self> {
        if value & !(COMPUTED_MARKER | FIELDS_MASK) != 0 || value & COMPUTED_MARKER == 0 {
            return None;
        }
        let mut i = 0;
        while i < WORD_LENGTH {
            if (value >> (i as u32 * BITS_PER_MATCH)) & FIELD_MASK == FIELD_MASK {
                return None;
            }
            i += 1;
        }
        Some(Self(value))
    }

    /// Raw bit value, marker included
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position fields without the marker, in `0..PATTERN_SPACE`
    #[inline]
    #[must_use]
    pub const fn bucket(self) -> usize {
        (self.0 & FIELDS_MASK) as usize
    }

    /// Outcome at a position
    ///
    /// # Panics
    /// Panics in debug mode if position >= 5
    #[inline]
    #[must_use]
    pub const fn match_at(self, position: usize) -> Match {
        debug_assert!(position < WORD_LENGTH);
        match Match::from_field((self.0 >> (position as u32 * BITS_PER_MATCH)) & FIELD_MASK) {
            Some(m) => m,
            None => Match::Miss,
        }
    }

    /// All five outcomes in position order
    #[must_use]
    pub const fn matches(self) -> [Match; WORD_LENGTH] {
        let mut matches = [Match::Miss; WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            matches[i] = self.match_at(i);
            i += 1;
        }
        matches
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Compute the feedback for `guess` played against `target`
    ///
    /// Duplicate letters are credited at most once per occurrence in the target:
    /// 1. Hit pass: exact position matches become hits and their letters are
    ///    removed from both words.
    /// 2. Partial pass: each remaining guess letter, left to right, takes the first
    ///    unused occurrence in the target's remaining letters, or is a miss.
    ///
    /// The roles are not symmetric; swapping target and guess can change the result.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Match, Pattern, Word};
    ///
    /// let target = Word::encode("sheep", 0);
    /// let guess = Word::encode("peers", 1);
    /// let pattern = Pattern::calculate(target, guess);
    ///
    /// assert_eq!(
    ///     pattern.matches(),
    ///     [Match::Partial, Match::Partial, Match::Hit, Match::Miss, Match::Partial]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(target: Word, guess: Word) -> Self {
        let mut target_left = target.letters();
        let mut guess_left = guess.letters();
        let mut result = [Match::Miss; WORD_LENGTH];

        // Hit pass
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_left[i] == target_left[i] {
                result[i] = Match::Hit;
                target_left[i] = 0;
                guess_left[i] = 0;
            }
        }

        // Partial pass
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess_left[i];
            if letter == 0 {
                continue;
            }
            if let Some(t) = target_left.iter().position(|&l| l == letter) {
                result[i] = Match::Partial;
                target_left[t] = 0;
            }
        }

        Self::from_matches(result)
    }

    /// Count the number of hits
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.matches().iter().filter(|&&m| m == Match::Hit).count()
    }

    /// Count the number of partials
    #[must_use]
    pub fn count_partials(self) -> usize {
        self.matches()
            .iter()
            .filter(|&&m| m == Match::Partial)
            .count()
    }

    /// Parse operator feedback: exactly five digits, `0` miss, `1` partial, `2` hit
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Pattern;
    ///
    /// assert_eq!(Pattern::from_digits("22222"), Some(Pattern::PERFECT));
    /// assert_eq!(Pattern::from_digits("1000").map(|p| p.value()), None);
    /// assert_eq!(Pattern::from_digits("10000").map(|p| p.value()), Some(2049));
    /// ```
    #[must_use]
    pub fn from_digits(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut matches = [Match::Miss; WORD_LENGTH];
        for (slot, ch) in matches.iter_mut().zip(chars) {
            *slot = match ch {
                '0' => Match::Miss,
                '1' => Match::Partial,
                '2' => Match::Hit,
                _ => return None,
            };
        }

        Some(Self::from_matches(matches))
    }

    /// Render as operator digits, e.g. `"10220"`
    #[must_use]
    pub fn to_digits(self) -> String {
        self.matches().iter().map(|m| m.digit()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_digits())
    }
}
