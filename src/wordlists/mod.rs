//! Word lists for Wordle solving
//!
//! The dictionary adapter plus the embedded lists compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{ANSWERS, ANSWERS_COUNT, DIFFICULT, DIFFICULT_COUNT, WORDS, WORDS_COUNT};

use crate::core::Word;

/// Stride of the reduced "small dictionary" guess pool
pub const SMALL_POOL_STRIDE: usize = 32;

/// A dictionary together with its named subsets
#[derive(Debug, Clone)]
pub struct WordSets {
    pub dictionary: Dictionary,
    pub answers: Vec<Word>,
    pub difficult: Vec<Word>,
}

impl WordSets {
    /// Build the word sets from the embedded lists
    ///
    /// # Errors
    /// Returns an error only if the embedded dictionary is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        let dictionary = Dictionary::from_texts(WORDS)?;
        Ok(Self::with_dictionary(dictionary))
    }

    /// Attach the embedded answer and difficult subsets to another dictionary
    ///
    /// Subset words the dictionary lacks are dropped.
    #[must_use]
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        let answers = dictionary.subset(ANSWERS);
        let difficult = dictionary.subset(DIFFICULT);
        Self {
            dictionary,
            answers,
            difficult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(DIFFICULT.len(), DIFFICULT_COUNT);
    }

    #[test]
    fn embedded_words_are_well_formed() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn subsets_drawn_from_dictionary() {
        let sets = WordSets::embedded().unwrap();
        assert_eq!(sets.dictionary.len(), WORDS_COUNT);
        assert_eq!(sets.answers.len(), ANSWERS_COUNT);
        assert_eq!(sets.difficult.len(), DIFFICULT_COUNT);
        for word in sets.answers.iter().chain(&sets.difficult) {
            assert_eq!(sets.dictionary.get(word.index()), Some(*word));
        }
    }

    #[test]
    fn strategy_words_present() {
        let sets = WordSets::embedded().unwrap();
        for text in ["stowp", "banjo", "zarfs"] {
            assert!(sets.dictionary.lookup(text).is_valid(), "{text} missing");
        }
    }
}
