//! Interactive play loop
//!
//! The solver names a word, the operator plays it and types back the feedback.
//! On a terminal keys are read one at a time in raw mode; piped input is read a
//! line at a time.

use super::feedback_line::{FeedbackLine, KeyInput, LineEvent, LineInput};
use crate::core::{Pattern, Word};
use crate::solver::{Advance, SolveError, Solver};
use anyhow::Result;
use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};

const CRLF: &str = "\r\n";
const LF: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Continue,
    Finished,
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            debug!("failed to leave raw mode: {e}");
        }
    }
}

/// Play against the operator on stdin/stdout
///
/// # Errors
/// Returns an error on terminal I/O failure or if the solver runs out of guesses.
pub fn run_play(solver: &mut Solver<'_>) -> Result<()> {
    if io::stdin().is_terminal() {
        run_raw_session(solver)
    } else {
        let stdin = io::stdin();
        run_line_session(solver, stdin.lock(), io::stdout().lock())
    }
}

fn run_raw_session(solver: &mut Solver<'_>) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    let mut out = io::stdout().lock();

    write_intro(&mut out, CRLF)?;
    let first = solver.begin()?;
    announce(&mut out, solver, first, CRLF)?;
    out.flush()?;

    let mut line = FeedbackLine::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(input) = key_input(key) else {
            continue;
        };
        match line.handle(input) {
            LineEvent::Echo(c) => write!(out, "{c}")?,
            LineEvent::Erase => write!(out, "\x08 \x08")?,
            LineEvent::Submit(pattern) => {
                write!(out, "{CRLF}")?;
                if apply_feedback(&mut out, solver, pattern, CRLF)? == Turn::Finished {
                    break;
                }
            }
            LineEvent::Ignored => continue,
            LineEvent::Quit => {
                write!(out, "{CRLF}")?;
                break;
            }
        }
        out.flush()?;
    }
    out.flush()?;
    Ok(())
}

/// Play with feedback read a line at a time
///
/// Ends on the perfect pattern, a quit line or end of input.
///
/// # Errors
/// Returns an error on I/O failure or if the solver runs out of guesses.
pub fn run_line_session<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    input: R,
    mut output: W,
) -> Result<()> {
    write_intro(&mut output, LF)?;
    let first = solver.begin()?;
    announce(&mut output, solver, first, LF)?;

    let mut line = FeedbackLine::new();
    for text in input.lines() {
        match line.feed_line(&text?) {
            LineInput::Pattern(pattern) => {
                if apply_feedback(&mut output, solver, pattern, LF)? == Turn::Finished {
                    break;
                }
            }
            LineInput::Invalid => {
                write!(
                    output,
                    "Enter five digits from 0, 1 and 2, or q to quit.{LF}> "
                )?;
            }
            LineInput::Quit => break,
        }
        output.flush()?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn key_input(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Quit)
        }
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Esc => Some(KeyInput::Quit),
        _ => None,
    }
}

fn write_intro<W: Write>(out: &mut W, eol: &str) -> io::Result<()> {
    write!(
        out,
        "{}{eol}For each letter type 0 (not in word), 1 (wrong place) or 2 (right place).{eol}Enter submits, q quits.{eol}",
        "Wordle minimax solver".bright_cyan().bold()
    )
}

fn announce<W: Write>(out: &mut W, solver: &Solver<'_>, word: Word, eol: &str) -> io::Result<()> {
    let step = solver.current_step().unwrap_or_default();
    write!(
        out,
        "{eol}Step {step}: INPUT THE FOLLOWING WORD: {}  ({} possible){eol}> ",
        word.decode().to_uppercase().bright_yellow().bold(),
        solver.remaining().len()
    )
}

fn apply_feedback<W: Write>(
    out: &mut W,
    solver: &mut Solver<'_>,
    pattern: Pattern,
    eol: &str,
) -> Result<Turn> {
    match solver.advance(pattern) {
        Ok(Advance::Guess(word)) => {
            announce(out, solver, word, eol)?;
            Ok(Turn::Continue)
        }
        Ok(Advance::Solved(step)) => {
            write!(
                out,
                "{}{eol}",
                format!("Congratulations! Solved at step {step}.").green().bold()
            )?;
            Ok(Turn::Finished)
        }
        Err(SolveError::EmptyPossibilitySet { .. }) => {
            write!(
                out,
                "No word fits feedback {}. Check it and enter again.{eol}> ",
                pattern.to_digits()
            )?;
            Ok(Turn::Continue)
        }
        Err(e) => Err(e.into()),
    }
}
