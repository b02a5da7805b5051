//! Indexed dictionary of packed words
//!
//! The dictionary is an ordered list; a word's position is its stable index and the
//! feedback cache key. Named subsets are drawn from it so they share those indices.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::io;
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read word list: {0}")]
    Io(#[from] io::Error),

    #[error("word list contains no valid words")]
    Empty,

    #[error("word list has {0} words, more than a dictionary can index")]
    TooLarge(usize),
}

/// Ordered collection of words with stable indices
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    positions: FxHashMap<u32, u16>,
}

impl Dictionary {
    /// Largest number of words; `u16::MAX` is reserved for the invalid sentinel
    pub const MAX_WORDS: usize = u16::MAX as usize;

    /// Build a dictionary from word texts, in order
    ///
    /// Entries that are not five letters or repeat an earlier entry are skipped.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if nothing valid remains, or `TooLarge` if
    /// there are more words than indices.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_texts(["crane", "slate", "toolong"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.lookup("slate").index(), 1);
    /// ```
    pub fn from_texts<I, S>(texts: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut positions = FxHashMap::default();

        for text in texts {
            let text = text.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            if words.len() >= Self::MAX_WORDS {
                return Err(DictionaryError::TooLarge(words.len() + 1));
            }

            let index = words.len() as u16;
            match Word::try_encode(text, index) {
                Ok(word) => {
                    if positions.contains_key(&word.value()) {
                        warn!("skipping duplicate dictionary entry '{text}'");
                        continue;
                    }
                    positions.insert(word.value(), index);
                    words.push(word);
                }
                Err(e) => warn!("skipping dictionary entry '{text}': {e}"),
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!("dictionary built with {} words", words.len());
        Ok(Self { words, positions })
    }

    /// Find a word by its text
    ///
    /// Returns [`Word::INVALID`] when the text is malformed or not in the dictionary.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Word {
        let Ok(probe) = Word::try_encode(text, Word::UNINDEXED) else {
            debug!("lookup of malformed word '{text}'");
            return Word::INVALID;
        };
        self.positions
            .get(&probe.value())
            .map_or_else(
                || {
                    debug!("'{text}' is not in the dictionary");
                    Word::INVALID
                },
                |&index| self.words[usize::from(index)],
            )
    }

    /// Word at a dictionary index
    #[must_use]
    pub fn get(&self, index: u16) -> Option<Word> {
        self.words.get(usize::from(index)).copied()
    }

    /// All words, in index order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Named subset drawn from this dictionary, keeping dictionary indices
    ///
    /// Texts missing from the dictionary are skipped with a warning.
    pub fn subset<I, S>(&self, texts: I) -> Vec<Word>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .filter_map(|text| {
                let text = text.as_ref().trim();
                if text.is_empty() {
                    return None;
                }
                let word = self.lookup(text);
                if word.is_valid() {
                    Some(word)
                } else {
                    warn!("subset word '{text}' is not in the dictionary");
                    None
                }
            })
            .collect()
    }

    /// Every `n`th word, keeping original indices
    ///
    /// Used as a reduced guess pool; `n == 0` is treated as 1.
    #[must_use]
    pub fn every_nth(&self, n: usize) -> Vec<Word> {
        self.words.iter().step_by(n.max(1)).copied().collect()
    }
}
