//! Corrective override table
//!
//! A heuristic patch tuned against one dictionary version: when the feedback of
//! the first two guesses matches an entry exactly, a hand-picked word is played
//! instead of the computed one. Histories with no entry fall through to the
//! minimax selector. The entries are data, not a general rule.

use crate::core::{Pattern, Word};
use crate::wordlists::Dictionary;
use log::warn;

/// One override: feedback after step 1 and step 2, and the word to play next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CorrectionRule {
    first: Pattern,
    second: Pattern,
    word: Word,
}

/// Finite lookup from the first two step results to an override word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionTable {
    rules: Vec<CorrectionRule>,
}

/// Built-in entries as (step 1 raw pattern, step 2 raw pattern, word)
const STANDARD_RULES: [(u16, u16, &str); 2] = [(2049, 2049, "banjo"), (2049, 2440, "zarfs")];

impl CorrectionTable {
    /// Table with no entries; every lookup falls through
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in entries, resolved against a dictionary
    ///
    /// Entries whose word is missing from the dictionary are left out.
    #[must_use]
    pub fn standard(dictionary: &Dictionary) -> Self {
        let mut table = Self::empty();
        for (first, second, text) in STANDARD_RULES {
            let word = dictionary.lookup(text);
            match (Pattern::from_raw(first), Pattern::from_raw(second)) {
                (Some(first), Some(second)) if word.is_valid() => {
                    table = table.with_rule(first, second, word);
                }
                _ => warn!("corrective entry for '{text}' dropped: word not in dictionary"),
            }
        }
        table
    }

    /// Add an entry; an earlier entry for the same history wins
    #[must_use]
    pub fn with_rule(mut self, first: Pattern, second: Pattern, word: Word) -> Self {
        self.rules.push(CorrectionRule {
            first,
            second,
            word,
        });
        self
    }

    /// Override word for a step history, if the first two results match an entry
    #[must_use]
    pub fn lookup(&self, history: &[Pattern]) -> Option<Word> {
        let [first, second, ..] = history else {
            return None;
        };
        self.rules
            .iter()
            .find(|rule| rule.first == *first && rule.second == *second)
            .map(|rule| rule.word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: u16) -> Pattern {
        Pattern::from_raw(value).unwrap()
    }

    #[test]
    fn standard_entries_resolve() {
        let dictionary = Dictionary::from_texts(["stowp", "banjo", "zarfs"]).unwrap();
        let table = CorrectionTable::standard(&dictionary);
        assert_eq!(table.len(), 2);

        assert_eq!(table.lookup(&[raw(2049), raw(2049)]).map(Word::decode).as_deref(), Some("banjo"));
        assert_eq!(table.lookup(&[raw(2049), raw(2440)]).map(Word::decode).as_deref(), Some("zarfs"));
        assert_eq!(table.lookup(&[raw(2049), raw(2440)]).map(Word::index), Some(2));
    }

    #[test]
    fn other_histories_fall_through() {
        let dictionary = Dictionary::from_texts(["banjo", "zarfs"]).unwrap();
        let table = CorrectionTable::standard(&dictionary);

        assert_eq!(table.lookup(&[raw(2440), raw(2049)]), None);
        assert_eq!(table.lookup(&[raw(2049), Pattern::ALL_MISS]), None);
        assert_eq!(table.lookup(&[raw(2049)]), None);
        assert_eq!(table.lookup(&[]), None);
    }

    #[test]
    fn only_first_two_results_matter() {
        let dictionary = Dictionary::from_texts(["banjo"]).unwrap();
        let table = CorrectionTable::standard(&dictionary);
        let history = [raw(2049), raw(2049), Pattern::PERFECT];
        assert_eq!(table.lookup(&history).map(Word::decode).as_deref(), Some("banjo"));
    }

    #[test]
    fn missing_words_are_dropped() {
        let dictionary = Dictionary::from_texts(["crane"]).unwrap();
        let table = CorrectionTable::standard(&dictionary);
        assert!(table.is_empty());
        assert_eq!(table.lookup(&[raw(2049), raw(2049)]), None);
    }

    #[test]
    fn custom_rules() {
        let word = Word::encode("crane", 0);
        let table = CorrectionTable::empty().with_rule(Pattern::ALL_MISS, Pattern::PERFECT, word);
        assert_eq!(table.lookup(&[Pattern::ALL_MISS, Pattern::PERFECT]), Some(word));
        assert_eq!(table.lookup(&[Pattern::PERFECT, Pattern::ALL_MISS]), None);
        assert_eq!(table.len(), 1);
    }
}
