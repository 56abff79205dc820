//! Unbuffered single-key reads
//!
//! Reads exactly one keypress with line buffering and local echo disabled,
//! returning the key's numeric code. The platform backend is selected at
//! compile time: termios on unix, the console input event queue on windows.
//! Targets with neither are rejected at build time, since no portable
//! fallback exists.
//!
//! Terminal reconfiguration is scoped to the call: the prior state is
//! captured before any flag is cleared and restored on every exit path,
//! error paths included. The read blocks until a key arrives. Callers must
//! not invoke this concurrently from multiple threads against the same
//! terminal; concurrent save/restore would corrupt shared terminal state.

use thiserror::Error;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(not(any(unix, windows)))]
compile_error!("unbuffered key reads are only implemented for unix and windows targets");

/// Sentinel key code returned by [`read_key`] when no key could be acquired.
pub const KEY_NONE: i32 = 0;

/// Error type for unbuffered key reads.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Querying or updating terminal attributes failed, typically because
    /// standard input is not a terminal.
    #[cfg(unix)]
    #[error("terminal attribute call failed: {0}")]
    Termios(#[from] nix::Error),
    /// The input stream closed before a key arrived.
    #[error("input closed before a key was read")]
    Closed,
    /// The standard input console handle could not be acquired.
    #[cfg(windows)]
    #[error("standard input console handle is invalid")]
    InvalidHandle,
    /// Reading from the console input event queue failed.
    #[cfg(windows)]
    #[error("console input read failed: {0}")]
    Console(#[source] std::io::Error),
}

/// Reads one key without buffering or echo, returning its numeric code.
pub fn try_read_key() -> Result<i32, KeyError> {
    #[cfg(unix)]
    {
        unix::read_key()
    }
    #[cfg(windows)]
    {
        windows::read_key()
    }
}

/// Reads one key without buffering or echo.
///
/// Returns [`KEY_NONE`] if the key could not be acquired; the failure
/// reason is logged. Use [`try_read_key`] to inspect it instead.
pub fn read_key() -> i32 {
    match try_read_key() {
        Ok(code) => code,
        Err(err) => {
            log::warn!("unbuffered key read failed: {}", err);
            KEY_NONE
        }
    }
}
