//! Bounded integer entry

use std::io::{self, BufRead, Write};

use super::{next_token, InputError};

/// A prompt that loops until a valid integer within an inclusive range is
/// entered.
///
/// Each kind of bad entry gets its own message: one for tokens that are not
/// integers at all, one for values above the maximum and one for values
/// below the minimum. Defaults accept the full `i64` range.
///
/// # Example
///
/// ```no_run
/// use console_toolkit::IntPrompt;
///
/// let n = IntPrompt::new()
///     .prompt("Enter a number between 1-10: ")
///     .range(1, 10)
///     .read()
///     .unwrap();
/// assert!((1..=10).contains(&n));
/// ```
#[derive(Debug, Clone)]
pub struct IntPrompt<'a> {
    prompt: &'a str,
    min: i64,
    max: i64,
    invalid: &'a str,
    too_big: &'a str,
    too_small: &'a str,
}

impl Default for IntPrompt<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntPrompt<'a> {
    /// Creates a prompt with default messages and unrestricted bounds.
    pub fn new() -> Self {
        Self {
            prompt: "Enter an integer: ",
            min: i64::MIN,
            max: i64::MAX,
            invalid: "Invalid input. Try again!",
            too_big: "Input too big. Try again!",
            too_small: "Input too small. Try again!",
        }
    }

    /// Sets the prompt shown before each attempt.
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Restricts accepted values to the inclusive range `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`; an inverted or empty range is a defect in the
    /// calling code.
    pub fn range(mut self, min: i64, max: i64) -> Self {
        assert!(
            min < max,
            "range minimum ({}) must be below the maximum ({})",
            min,
            max
        );
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the message shown when the token is not an integer.
    pub fn invalid_message(mut self, message: &'a str) -> Self {
        self.invalid = message;
        self
    }

    /// Sets the message shown when the value is above the maximum.
    pub fn too_big_message(mut self, message: &'a str) -> Self {
        self.too_big = message;
        self
    }

    /// Sets the message shown when the value is below the minimum.
    pub fn too_small_message(mut self, message: &'a str) -> Self {
        self.too_small = message;
        self
    }

    /// Runs the prompt against stdin/stdout. Blocks until a valid value.
    pub fn read(&self) -> Result<i64, InputError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.read_from(stdin.lock(), stdout.lock())
    }

    /// Runs the prompt against an arbitrary reader and writer.
    pub fn read_from<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<i64, InputError> {
        loop {
            write!(writer, "{}", self.prompt)?;
            writer.flush()?;

            let token = next_token(&mut reader)?;
            match token.parse::<i64>() {
                Err(_) => writeln!(writer, "{}", self.invalid)?,
                Ok(n) if n > self.max => writeln!(writer, "{}", self.too_big)?,
                Ok(n) if n < self.min => writeln!(writer, "{}", self.too_small)?,
                Ok(n) => return Ok(n),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(prompt: &IntPrompt, input: &str) -> (i64, String) {
        let mut out = Vec::new();
        let value = prompt.read_from(Cursor::new(input), &mut out).unwrap();
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_first_try_emits_no_error() {
        let prompt = IntPrompt::new().range(1, 10);
        let (value, out) = run(&prompt, "5\n");
        assert_eq!(value, 5);
        assert_eq!(out, "Enter an integer: ");
    }

    #[test]
    fn invalid_then_too_big_then_valid() {
        let prompt = IntPrompt::new().range(1, 10);
        let (value, out) = run(&prompt, "x\n15\n4\n");
        assert_eq!(value, 4);
        assert_eq!(out.matches("Invalid input. Try again!").count(), 1);
        assert_eq!(out.matches("Input too big. Try again!").count(), 1);
    }

    #[test]
    fn too_small_message() {
        let prompt = IntPrompt::new().range(5, 10);
        let (value, out) = run(&prompt, "2\n7\n");
        assert_eq!(value, 7);
        assert_eq!(out.matches("Input too small. Try again!").count(), 1);
    }

    #[test]
    fn accepts_negative_values() {
        let prompt = IntPrompt::new().range(-10, -1);
        let (value, _) = run(&prompt, "-3\n");
        assert_eq!(value, -3);
    }

    #[test]
    fn bounds_are_inclusive() {
        let prompt = IntPrompt::new().range(1, 10);
        assert_eq!(run(&prompt, "1\n").0, 1);
        assert_eq!(run(&prompt, "10\n").0, 10);
    }

    #[test]
    fn overflowing_token_counts_as_invalid() {
        let prompt = IntPrompt::new().range(1, 10);
        let (value, out) = run(&prompt, "99999999999999999999999\n3\n");
        assert_eq!(value, 3);
        assert_eq!(out.matches("Invalid input. Try again!").count(), 1);
    }

    #[test]
    fn trailing_junk_after_valid_token_is_discarded() {
        let prompt = IntPrompt::new().range(1, 10);
        let (value, out) = run(&prompt, "9 junk\n");
        assert_eq!(value, 9);
        assert!(!out.contains("Try again!"));
    }

    #[test]
    fn default_range_accepts_any_integer() {
        let prompt = IntPrompt::new();
        assert_eq!(run(&prompt, "-9223372036854775808\n").0, i64::MIN);
        assert_eq!(run(&prompt, "9223372036854775807\n").0, i64::MAX);
    }

    #[test]
    fn eof_is_an_error() {
        let mut out = Vec::new();
        let result = IntPrompt::new().read_from(Cursor::new("nope\n"), &mut out);
        assert!(matches!(result, Err(InputError::Eof)));
    }

    #[test]
    #[should_panic(expected = "must be below")]
    fn inverted_range_panics() {
        let _ = IntPrompt::new().range(10, 1);
    }

    #[test]
    #[should_panic(expected = "must be below")]
    fn empty_range_panics() {
        let _ = IntPrompt::new().range(5, 5);
    }
}
