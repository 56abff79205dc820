//! ANSI color and style escape sequences
//!
//! Plain `'static` string constants; print one to switch the terminal's
//! foreground color or style, and [`RESET`] to switch back. Rendering
//! varies between terminals (ORANGE is plain yellow on many), and very
//! basic consoles may not honor them at all.

pub const BLACK: &str = "\u{1b}[30m";
pub const RED: &str = "\u{1b}[31m";
pub const GREEN: &str = "\u{1b}[32m";
pub const ORANGE: &str = "\u{1b}[33m";
pub const BLUE: &str = "\u{1b}[34m";
pub const PURPLE: &str = "\u{1b}[35m";
pub const CYAN: &str = "\u{1b}[36m";
pub const WHITE: &str = "\u{1b}[37m";

pub const BOLD: &str = "\u{1b}[1m";
pub const UNDERLINE: &str = "\u{1b}[4m";
pub const REVERSED: &str = "\u{1b}[7m";
pub const RESET: &str = "\u{1b}[0m";

pub const BRIGHT_RED: &str = "\u{1b}[31;1m";
pub const BRIGHT_GREEN: &str = "\u{1b}[32;1m";
pub const BRIGHT_ORANGE: &str = "\u{1b}[33;1m";
pub const BRIGHT_BLUE: &str = "\u{1b}[34;1m";
pub const BRIGHT_PURPLE: &str = "\u{1b}[35;1m";
pub const BRIGHT_CYAN: &str = "\u{1b}[36;1m";
pub const BRIGHT_WHITE: &str = "\u{1b}[37;1m";
pub const LIGHT_GREY: &str = "\u{1b}[90;1m";

/// Every foreground color, excluding control sequences such as [`RESET`]
/// and [`BOLD`].
pub const PALETTE: [&str; 16] = [
    BLACK,
    RED,
    GREEN,
    ORANGE,
    BLUE,
    PURPLE,
    CYAN,
    WHITE,
    BRIGHT_RED,
    BRIGHT_GREEN,
    BRIGHT_ORANGE,
    BRIGHT_BLUE,
    BRIGHT_PURPLE,
    BRIGHT_CYAN,
    BRIGHT_WHITE,
    LIGHT_GREY,
];
