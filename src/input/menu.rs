//! Numbered menu selection

use std::io::{self, BufRead, Write};

use super::{next_token, InputError};

/// Smallest number of options a menu may display.
pub const MIN_OPTIONS: usize = 2;
/// Largest number of options a menu may display (ordinals stay single-digit).
pub const MAX_OPTIONS: usize = 9;

/// A one-shot numbered menu.
///
/// Displays each option with a 1-based ordinal prefix, then loops until the
/// user enters a valid selection, and returns the 0-based index of the
/// chosen option.
///
/// # Example
///
/// ```no_run
/// use console_toolkit::Menu;
///
/// let options = ["Option A", "Option B", "Option C"];
/// let index = Menu::new(&options)
///     .prompt("Pick one: ")
///     .read()
///     .unwrap();
/// println!("you picked {}", options[index]);
/// ```
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    options: &'a [&'a str],
    prompt: &'a str,
    invalid: &'a str,
}

impl<'a> Menu<'a> {
    /// Creates a menu over `options` with default prompt and message.
    ///
    /// # Panics
    ///
    /// Panics if `options` has fewer than [`MIN_OPTIONS`] or more than
    /// [`MAX_OPTIONS`] entries. That is a defect in the calling code, not
    /// recoverable user input.
    pub fn new(options: &'a [&'a str]) -> Self {
        assert!(
            options.len() >= MIN_OPTIONS,
            "a menu needs at least {} options, got {}",
            MIN_OPTIONS,
            options.len()
        );
        assert!(
            options.len() <= MAX_OPTIONS,
            "a menu can show at most {} options, got {}",
            MAX_OPTIONS,
            options.len()
        );
        Self {
            options,
            prompt: "Select an option: ",
            invalid: "Please enter a valid option!",
        }
    }

    /// Sets the prompt shown before each selection attempt.
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Sets the message shown for malformed or out-of-range entries.
    pub fn invalid_message(mut self, message: &'a str) -> Self {
        self.invalid = message;
        self
    }

    /// Runs the menu against stdin/stdout. Blocks until a valid selection.
    pub fn read(&self) -> Result<usize, InputError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.read_from(stdin.lock(), stdout.lock())
    }

    /// Runs the menu against an arbitrary reader and writer.
    ///
    /// Malformed input (not an integer) and out-of-range input both print
    /// the invalid-entry message and re-prompt; the caller cannot tell the
    /// two apart and does not need to.
    pub fn read_from<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<usize, InputError> {
        for (i, option) in self.options.iter().enumerate() {
            writeln!(writer, "{}: {}", i + 1, option)?;
        }

        loop {
            write!(writer, "{}", self.prompt)?;
            writer.flush()?;

            let token = next_token(&mut reader)?;
            match token.parse::<usize>() {
                Ok(n) if (1..=self.options.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(writer, "{}", self.invalid)?,
            }
        }
    }
}
