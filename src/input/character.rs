//! Single-character entry with an optional allow-list

use std::io::{self, BufRead, Write};

use super::{next_token, InputError};

/// A prompt that loops until exactly one character is entered, optionally
/// restricted to an allow-list.
///
/// An empty allow-list (the default) accepts any single character. Entries
/// longer than one character get the not-a-character message; characters
/// outside a non-empty allow-list get the not-in-list message.
///
/// # Example
///
/// ```no_run
/// use console_toolkit::CharPrompt;
///
/// let answer = CharPrompt::new()
///     .prompt("Continue? [y/n] ")
///     .allow(&['y', 'n'])
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CharPrompt<'a> {
    prompt: &'a str,
    allowed: &'a [char],
    not_a_char: &'a str,
    not_allowed: &'a str,
}

impl Default for CharPrompt<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CharPrompt<'a> {
    /// Creates a prompt with default messages and no allow-list.
    pub fn new() -> Self {
        Self {
            prompt: "Enter a char: ",
            allowed: &[],
            not_a_char: "Input is not a character. Try again!",
            not_allowed: "Invalid input. Try again!",
        }
    }

    /// Sets the prompt shown before each attempt.
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Restricts accepted characters to `allowed`. An empty slice means any
    /// character is accepted.
    pub fn allow(mut self, allowed: &'a [char]) -> Self {
        self.allowed = allowed;
        self
    }

    /// Sets the message shown when more than one character is entered.
    pub fn not_a_char_message(mut self, message: &'a str) -> Self {
        self.not_a_char = message;
        self
    }

    /// Sets the message shown when the character is not in the allow-list.
    pub fn not_allowed_message(mut self, message: &'a str) -> Self {
        self.not_allowed = message;
        self
    }

    /// Runs the prompt against stdin/stdout. Blocks until a valid character.
    pub fn read(&self) -> Result<char, InputError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.read_from(stdin.lock(), stdout.lock())
    }

    /// Runs the prompt against an arbitrary reader and writer.
    pub fn read_from<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<char, InputError> {
        loop {
            write!(writer, "{}", self.prompt)?;
            writer.flush()?;

            let token = next_token(&mut reader)?;
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if self.allowed.is_empty() || self.allowed.contains(&c) {
                        return Ok(c);
                    }
                    writeln!(writer, "{}", self.not_allowed)?;
                }
                _ => writeln!(writer, "{}", self.not_a_char)?,
            }
        }
    }
}
