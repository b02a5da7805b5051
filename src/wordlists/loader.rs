//! Word list loading utilities
//!
//! Reads newline-separated word lists from disk.

use super::{Dictionary, DictionaryError};
use std::fs;
use std::io;
use std::path::Path;

/// Read the non-empty, trimmed lines of a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_word_texts<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load a dictionary from a file
///
/// Invalid entries are skipped; indices follow file order.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or `Empty` if it
/// holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let texts = read_word_texts(path)?;
    Dictionary::from_texts(texts)
}
