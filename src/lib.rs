//! Console Toolkit - validated console input helpers and terminal conveniences
//!
//! A small library of blocking, synchronous console helpers: a numbered menu
//! selector, a bounded integer prompt, a constrained character prompt, an
//! unbuffered single-key reader with platform-specific backends, plus ANSI
//! color constants and a couple of debugging utilities.
//!
//! Every prompt loops until it gets valid input, printing a customizable
//! message on each bad entry. Prompts are generic over their reader and
//! writer, so they can be driven from any `BufRead`/`Write` pair; the plain
//! `read()` methods run against stdin/stdout.
//!
//! ```no_run
//! use console_toolkit::{IntPrompt, Menu};
//!
//! # fn main() -> Result<(), console_toolkit::InputError> {
//! let options = ["Start", "Settings", "Quit"];
//! let choice = Menu::new(&options).read()?;
//!
//! let count = IntPrompt::new()
//!     .prompt("How many players (1-4)? ")
//!     .range(1, 4)
//!     .read()?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod input;
pub mod utils;

pub use input::{CharPrompt, InputError, IntPrompt, Menu};
