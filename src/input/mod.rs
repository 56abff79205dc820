//! Validated console input prompts
//!
//! Each prompt is an independent, blocking helper: it writes its prompt,
//! reads whitespace-delimited tokens, and loops until a valid value arrives.
//! Bad user input is never an error; it prints a message and retries.

mod character;
mod menu;
mod number;
pub mod unbuffered;

pub use character::CharPrompt;
pub use menu::Menu;
pub use number::IntPrompt;
pub use unbuffered::{read_key, try_read_key, KeyError, KEY_NONE};

use std::io;

use thiserror::Error;

/// Error type for the prompt loops.
///
/// Only the stream itself failing is an error; invalid or out-of-range
/// entries are handled inside the loop by re-prompting.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream closed before a valid value was entered.
    #[error("input stream closed before a valid value was entered")]
    Eof,
    /// Reading input or writing a prompt failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads the first whitespace-delimited token from the next non-blank line.
///
/// The remainder of the line is discarded, so leftover characters from a
/// malformed entry can never be re-parsed by the next loop iteration.
fn next_token<R: io::BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}
