//! Formatting utilities for terminal output

use crate::core::{Match, Pattern, Word};
use colored::Colorize;

/// Words printed per line in word lists
pub const WORDS_PER_LINE: usize = 18;

/// Default number of lines a word list may take
pub const DEFAULT_MAX_LINES: usize = 4;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .matches()
        .iter()
        .map(|m| match m {
            Match::Miss => '⬜',
            Match::Partial => '🟨',
            Match::Hit => '🟩',
        })
        .collect()
}

/// Color each letter of a guess by its feedback
#[must_use]
pub fn colored_guess(word: Word, pattern: Pattern) -> String {
    word.decode()
        .to_uppercase()
        .chars()
        .zip(pattern.matches())
        .map(|(letter, m)| {
            let letter = letter.to_string();
            match m {
                Match::Miss => letter.bright_black().to_string(),
                Match::Partial => letter.black().on_yellow().to_string(),
                Match::Hit => letter.black().on_green().to_string(),
            }
        })
        .collect()
}

/// Bar of `width` cells filled in proportion to `count / max`
///
/// Any non-zero count gets at least one filled cell.
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * width / max).max(usize::from(count > 0)).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay out words `WORDS_PER_LINE` to a line, at most `max_lines` lines
///
/// A truncated list ends with `...`.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::output::formatters::format_word_list;
///
/// let words = [Word::encode("crane", 0), Word::encode("slate", 1)];
/// assert_eq!(format_word_list(&words, 4), "crane, slate");
/// ```
#[must_use]
pub fn format_word_list(words: &[Word], max_lines: usize) -> String {
    let shown = words.len().min(WORDS_PER_LINE * max_lines);
    let mut lines: Vec<String> = words[..shown]
        .chunks(WORDS_PER_LINE)
        .map(|line| {
            line.iter()
                .map(|w| w.decode())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    if shown < words.len() {
        if let Some(last) = lines.last_mut() {
            last.push_str(", ...");
        } else {
            lines.push("...".to_string());
        }
    }

    lines.join("\n")
}
