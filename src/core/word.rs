//! Packed word representation
//!
//! A Word stores its five letters as 5-bit fields in a `u32` (a = 1 .. z = 26,
//! 0 = empty), least-significant field first, plus the dictionary index used as a
//! feedback cache key.

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Width of one packed letter field
pub const BITS_PER_LETTER: u32 = 5;

const LETTER_MASK: u32 = (1 << BITS_PER_LETTER) - 1;

/// A 5-letter word packed into an integer, tagged with its dictionary index
///
/// Equality and hashing look only at the packed letters; the index is a cache key
/// and two copies of the same word from different lists compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Word {
    value: u32,
    index: u16,
}

/// Error type for text that cannot be encoded as a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),

    #[error("word contains non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// The "no word" sentinel. Never a valid guess or target.
    pub const INVALID: Self = Self {
        value: 0,
        index: u16::MAX,
    };

    /// Index carried by words that do not belong to a dictionary
    pub const UNINDEXED: u16 = u16::MAX;

    /// Encode text into a word, failing on bad length or non-letters
    ///
    /// ASCII uppercase letters are folded to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    ///
    /// let word = Word::try_encode("crane", 0).unwrap();
    /// assert_eq!(word.decode(), "crane");
    ///
    /// assert!(Word::try_encode("too long", 0).is_err());
    /// assert!(Word::try_encode("sh0rt", 0).is_err());
    /// ```
    pub fn try_encode(text: &str, index: u16) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut value = 0u32;
        for (i, ch) in text.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(ch));
            }
            let letter = u32::from(ch.to_ascii_lowercase() as u8 - b'a' + 1);
            value |= letter << (i as u32 * BITS_PER_LETTER);
        }

        Ok(Self { value, index })
    }

    /// Encode text into a word, returning [`Word::INVALID`] on malformed input
    #[must_use]
    pub fn encode(text: &str, index: u16) -> Self {
        Self::try_encode(text, index).unwrap_or(Self::INVALID)
    }

    /// Rebuild a word from a raw packed value
    #[inline]
    #[must_use]
    pub const fn from_raw(value: u32, index: u16) -> Self {
        Self { value, index }
    }

    /// Packed letter fields
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Stable dictionary index, or [`Word::UNINDEXED`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.index
    }

    /// Letter value (1-26, or 0 if empty) at a position
    ///
    /// # Panics
    /// Panics in debug mode if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(self, position: usize) -> u8 {
        debug_assert!(position < WORD_LENGTH);
        ((self.value >> (position as u32 * BITS_PER_LETTER)) & LETTER_MASK) as u8
    }

    /// All five letter values in position order
    #[inline]
    #[must_use]
    pub const fn letters(self) -> [u8; WORD_LENGTH] {
        let mut letters = [0u8; WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            letters[i] = self.letter_at(i);
            i += 1;
        }
        letters
    }

    /// True when every field holds a letter in 1..=26 and no stray bits are set
    #[must_use]
    pub const fn is_valid(self) -> bool {
        if self.value >> (WORD_LENGTH as u32 * BITS_PER_LETTER) != 0 {
            return false;
        }
        let mut i = 0;
        while i < WORD_LENGTH {
            let letter = self.letter_at(i);
            if letter == 0 || letter > 26 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Decode back to lowercase text
    ///
    /// Empty or out-of-range fields decode as `?`.
    #[must_use]
    pub fn decode(self) -> String {
        self.letters()
            .iter()
            .map(|&letter| match letter {
                1..=26 => char::from(b'a' + letter - 1),
                _ => '?',
            })
            .collect()
    }

    /// Tie-break score favouring rarely used letters
    ///
    /// Each of z, x, v, j, m and g toggles its own bit, so a repeated rare letter
    /// cancels itself out.
    #[must_use]
    pub fn rare_letter_score(self) -> u8 {
        self.letters()
            .iter()
            .fold(0u8, |score, &letter| score ^ rare_letter_bit(letter))
    }
}

const fn rare_letter_bit(letter: u8) -> u8 {
    match letter {
        26 => 1 << 7, // z
        24 => 1 << 6, // x
        22 => 1 << 5, // v
        10 => 1 << 4, // j
        13 => 1 << 2, // m
        7 => 1 << 1,  // g
        _ => 0,
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.decode())
        } else {
            write!(f, "<invalid>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_packs_least_significant_first() {
        let word = Word::encode("abcde", 3);
        let expected = 1 | (2 << 5) | (3 << 10) | (4 << 15) | (5 << 20);
        assert_eq!(word.value(), expected);
        assert_eq!(word.index(), 3);
    }

    #[test]
    fn encode_uppercase_folded() {
        assert_eq!(Word::encode("CRANE", 0), Word::encode("crane", 0));
        assert_eq!(Word::encode("CrAnE", 0).decode(), "crane");
    }

    #[test]
    fn encode_invalid_length() {
        assert_eq!(
            Word::try_encode("too long", 0),
            Err(WordError::InvalidLength(8))
        );
        assert_eq!(Word::try_encode("shrt", 0), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::try_encode("", 0), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn encode_invalid_characters() {
        assert_eq!(
            Word::try_encode("cran3", 0),
            Err(WordError::InvalidCharacter('3'))
        );
        assert!(Word::try_encode("cran ", 0).is_err());
        assert!(Word::try_encode("cran!", 0).is_err());
        assert!(Word::try_encode("crané", 0).is_err());
    }

    #[test]
    fn encode_failure_returns_sentinel() {
        let word = Word::encode("nope!", 7);
        assert_eq!(word, Word::INVALID);
        assert_eq!(word.index(), Word::UNINDEXED);
        assert!(!word.is_valid());
    }

    #[test]
    fn letter_at_positions() {
        let word = Word::encode("crane", 0);
        assert_eq!(word.letter_at(0), 3);
        assert_eq!(word.letter_at(1), 18);
        assert_eq!(word.letter_at(2), 1);
        assert_eq!(word.letter_at(3), 14);
        assert_eq!(word.letter_at(4), 5);
        assert_eq!(word.letters(), [3, 18, 1, 14, 5]);
    }

    #[test]
    fn equality_ignores_index() {
        let a = Word::encode("slate", 1);
        let b = Word::encode("slate", 900);
        assert_eq!(a, b);
        assert_ne!(a, Word::encode("crate", 1));
    }

    #[test]
    fn from_raw_round_trips_value() {
        let word = Word::encode("zills", 12);
        let copy = Word::from_raw(word.value(), 12);
        assert_eq!(copy, word);
        assert_eq!(copy.decode(), "zills");
    }

    #[test]
    fn validity_rejects_stray_fields() {
        assert!(Word::encode("zzzzz", 0).is_valid());
        // 27 is outside the alphabet
        assert!(!Word::from_raw(27, 0).is_valid());
        // a sixth field
        assert!(!Word::from_raw(Word::encode("aaaaa", 0).value() | (1 << 25), 0).is_valid());
    }

    #[test]
    fn rare_letter_score_bits() {
        assert_eq!(Word::encode("crane", 0).rare_letter_score(), 0);
        assert_eq!(Word::encode("zarfs", 0).rare_letter_score(), 1 << 7);
        assert_eq!(Word::encode("jumpy", 0).rare_letter_score(), (1 << 4) | (1 << 2));
        assert_eq!(Word::encode("glyph", 0).rare_letter_score(), 1 << 1);
    }

    #[test]
    fn rare_letter_score_repeats_cancel() {
        // two z's toggle the same bit twice
        assert_eq!(Word::encode("jazzy", 0).rare_letter_score(), 1 << 4);
        assert_eq!(Word::encode("fizzy", 0).rare_letter_score(), 0);
    }

    #[test]
    fn display_valid_and_invalid() {
        assert_eq!(format!("{}", Word::encode("crane", 0)), "crane");
        assert_eq!(format!("{}", Word::INVALID), "<invalid>");
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(text in "[a-z]{5}") {
            let word = Word::encode(&text, 0);
            prop_assert!(word.is_valid());
            prop_assert_eq!(word.decode(), text);
        }

        #[test]
        fn wrong_length_is_rejected(text in "[a-z]{0,4}|[a-z]{6,9}") {
            prop_assert_eq!(Word::encode(&text, 0), Word::INVALID);
        }
    }
}
