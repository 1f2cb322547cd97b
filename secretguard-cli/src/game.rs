//! Line-oriented guessing loop.
//!
//! One line of input is one guess. Only the line terminator is stripped;
//! leading and trailing spaces are part of the guess.

use std::io::{BufRead, Write};

use secretguard_core::{Guard, GuessOutcome};
use zeroize::Zeroizing;

use crate::error::CliError;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Secret guessed. Holds the number of guesses made, including the winning one.
    Won {
        /// Total guesses submitted.
        guesses: usize,
    },
    /// Attempts exhausted.
    Locked,
    /// Input ended before a win or a lockout.
    InputClosed,
}

/// Run guesses from `input` against `guard` until it is won, locked or
/// input runs out.
pub fn play<R: BufRead, W: Write>(
    guard: &mut Guard,
    mut input: R,
    mut output: W,
) -> Result<GameResult, CliError> {
    let mut guesses = 0;
    let mut line = Zeroizing::new(Vec::new());

    loop {
        if guard.is_locked() {
            writeln!(output, "Locked. No attempts remain.")?;
            return Ok(GameResult::Locked);
        }

        write!(output, "[{} left] guess> ", guard.remaining())?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            tracing::info!(guesses, "input closed");
            return Ok(GameResult::InputClosed);
        }
        guesses += 1;

        match guard.attempt(strip_line_ending(&line)) {
            GuessOutcome::Matched => {
                writeln!(output, "Correct.")?;
                tracing::info!(guesses, "secret guessed");
                return Ok(GameResult::Won { guesses });
            }
            GuessOutcome::Mismatched { remaining } => {
                writeln!(output, "Wrong. {} attempt(s) left.", remaining)?;
            }
            GuessOutcome::Locked => {
                writeln!(output, "Locked. No attempts remain.")?;
                return Ok(GameResult::Locked);
            }
        }
    }
}

/// Drop a trailing `\n` or `\r\n`. Nothing else.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
