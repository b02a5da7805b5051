//! Cached feedback computation
//!
//! The solver asks for the same (target, guess) patterns thousands of times per
//! guess selection, so every computed pattern is memoised by dictionary index.

use crate::core::{Pattern, Word};
use log::trace;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};

/// Dictionaries up to this size get a dense N×N table; larger ones a hash map
pub const DENSE_CACHE_LIMIT: usize = 4096;

/// Cell value meaning "not computed yet"; computed patterns always carry the marker
const UNCOMPUTED: u16 = 0;

enum Backing {
    Dense { dim: usize, cells: Vec<Cell<u16>> },
    Sparse(RefCell<FxHashMap<(u16, u16), u16>>),
}

/// Memo table of patterns keyed by (target index, guess index)
///
/// Keys are ordered: (a, b) and (b, a) are different cells. Writes go through
/// shared references because the solver is single-threaded; the type is `!Sync`.
pub struct FeedbackCache {
    backing: Backing,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl FeedbackCache {
    /// Cache sized for a dictionary of `words` entries
    #[must_use]
    pub fn for_dictionary(words: usize) -> Self {
        if words <= DENSE_CACHE_LIMIT {
            Self::dense(words)
        } else {
            Self::sparse()
        }
    }

    /// Dense N×N table
    #[must_use]
    pub fn dense(words: usize) -> Self {
        Self {
            backing: Backing::Dense {
                dim: words,
                cells: vec![Cell::new(UNCOMPUTED); words * words],
            },
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Hash map keyed by index pair, filled on demand
    #[must_use]
    pub fn sparse() -> Self {
        Self {
            backing: Backing::Sparse(RefCell::new(FxHashMap::default())),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    fn slot(dim: usize, target: u16, guess: u16) -> Option<usize> {
        let (t, g) = (usize::from(target), usize::from(guess));
        (t < dim && g < dim).then_some(t * dim + g)
    }

    /// Stored pattern for the pair, if computed
    #[must_use]
    pub fn get(&self, target: u16, guess: u16) -> Option<Pattern> {
        let raw = match &self.backing {
            Backing::Dense { dim, cells } => {
                Self::slot(*dim, target, guess).map_or(UNCOMPUTED, |i| cells[i].get())
            }
            Backing::Sparse(map) => map
                .borrow()
                .get(&(target, guess))
                .copied()
                .unwrap_or(UNCOMPUTED),
        };

        let found = Pattern::from_raw(raw);
        if found.is_some() {
            self.hits.set(self.hits.get() + 1);
        } else {
            self.misses.set(self.misses.get() + 1);
        }
        found
    }

    /// Store a pattern; overwriting a cell with the same value is harmless
    ///
    /// Pairs outside a dense table's range are not stored.
    pub fn insert(&self, target: u16, guess: u16, pattern: Pattern) {
        match &self.backing {
            Backing::Dense { dim, cells } => {
                if let Some(i) = Self::slot(*dim, target, guess) {
                    cells[i].set(pattern.value());
                }
            }
            Backing::Sparse(map) => {
                map.borrow_mut().insert((target, guess), pattern.value());
            }
        }
    }

    /// Lookups answered from the table
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Lookups that found no stored pattern
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// True for the dense table
    #[must_use]
    pub const fn is_dense(&self) -> bool {
        matches!(self.backing, Backing::Dense { .. })
    }
}

/// Computes feedback patterns through an owned [`FeedbackCache`]
pub struct FeedbackEngine {
    cache: FeedbackCache,
}

impl FeedbackEngine {
    #[must_use]
    pub const fn new(cache: FeedbackCache) -> Self {
        Self { cache }
    }

    /// Engine with a cache sized for `words` dictionary entries
    #[must_use]
    pub fn for_dictionary(words: usize) -> Self {
        Self::new(FeedbackCache::for_dictionary(words))
    }

    /// Feedback for `guess` played against `target`
    ///
    /// Words without a dictionary index bypass the cache.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Pattern, Word};
    /// use wordle_minimax::solver::FeedbackEngine;
    ///
    /// let engine = FeedbackEngine::for_dictionary(2);
    /// let target = Word::encode("fghij", 0);
    /// let guess = Word::encode("abcde", 1);
    ///
    /// assert_eq!(engine.compute(target, guess), Pattern::ALL_MISS);
    /// assert_eq!(engine.cache().get(0, 1), Some(Pattern::ALL_MISS));
    /// ```
    #[must_use]
    pub fn compute(&self, target: Word, guess: Word) -> Pattern {
        let cacheable = target.index() != Word::UNINDEXED && guess.index() != Word::UNINDEXED;

        if cacheable && let Some(pattern) = self.cache.get(target.index(), guess.index()) {
            return pattern;
        }

        let pattern = Pattern::calculate(target, guess);
        if cacheable {
            self.cache.insert(target.index(), guess.index(), pattern);
        }
        pattern
    }

    #[must_use]
    pub const fn cache(&self) -> &FeedbackCache {
        &self.cache
    }

    /// Emit cache counters at trace level
    pub fn log_cache_stats(&self) {
        trace!(
            "feedback cache: {} hits, {} misses ({})",
            self.cache.hits(),
            self.cache.misses(),
            if self.cache.is_dense() { "dense" } else { "sparse" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::encode(t, i as u16))
            .collect()
    }

    #[test]
    fn uncomputed_cell_is_none() {
        let cache = FeedbackCache::dense(3);
        assert_eq!(cache.get(0, 1), None);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn all_miss_is_distinct_from_uncomputed() {
        let cache = FeedbackCache::dense(2);
        cache.insert(0, 1, Pattern::ALL_MISS);
        assert_eq!(cache.get(0, 1), Some(Pattern::ALL_MISS));
        assert_eq!(cache.get(1, 0), None);
    }

    #[test]
    fn key_order_matters() {
        let w = words(&["sheep", "peers"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        let forward = engine.compute(w[0], w[1]);
        let backward = engine.compute(w[1], w[0]);
        assert_ne!(forward, backward);
        assert_eq!(engine.cache().get(0, 1), Some(forward));
        assert_eq!(engine.cache().get(1, 0), Some(backward));
    }

    #[test]
    fn cached_result_matches_direct_calculation() {
        let w = words(&["crane", "slate", "level", "excel", "sheep", "peers"]);
        let engine = FeedbackEngine::for_dictionary(w.len());

        for &target in &w {
            for &guess in &w {
                let first = engine.compute(target, guess);
                let second = engine.compute(target, guess);
                assert_eq!(first, Pattern::calculate(target, guess));
                assert_eq!(first, second);
            }
        }
        assert_eq!(engine.cache().hits(), 36);
    }

    #[test]
    fn sparse_backing_behaves_like_dense() {
        let w = words(&["crane", "slate", "irate"]);
        let dense = FeedbackEngine::new(FeedbackCache::dense(w.len()));
        let sparse = FeedbackEngine::new(FeedbackCache::sparse());
        assert!(!sparse.cache().is_dense());

        for &target in &w {
            for &guess in &w {
                assert_eq!(dense.compute(target, guess), sparse.compute(target, guess));
            }
        }
        assert_eq!(sparse.cache().get(2, 0), dense.cache().get(2, 0));
    }

    #[test]
    fn unindexed_words_bypass_cache() {
        let engine = FeedbackEngine::for_dictionary(1);
        let target = Word::encode("crane", Word::UNINDEXED);
        let guess = Word::encode("slate", Word::UNINDEXED);

        assert_eq!(engine.compute(target, guess), Pattern::calculate(target, guess));
        assert_eq!(engine.cache().hits() + engine.cache().misses(), 0);
    }

    #[test]
    fn out_of_range_index_not_stored() {
        let cache = FeedbackCache::dense(2);
        cache.insert(5, 0, Pattern::PERFECT);
        assert_eq!(cache.get(5, 0), None);
    }

    #[test]
    fn size_selects_backing() {
        assert!(FeedbackCache::for_dictionary(10).is_dense());
        assert!(!FeedbackCache::for_dictionary(DENSE_CACHE_LIMIT + 1).is_dense());
    }
}
