//! POSIX termios backend
//!
//! Snapshots the terminal attributes, clears `ICANON` and `ECHO`, reads one
//! byte, and restores the snapshot. Restoration is tied to a guard's `Drop`
//! so it fires on every exit path.

use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};

use nix::errno::Errno;
use nix::sys::termios::{self, LocalFlags, SetArg, Termios};

use super::KeyError;

/// Scoped raw-mode switch. Holds the attributes captured before canonical
/// mode and echo were cleared; `Drop` re-applies them.
struct RawModeGuard<'fd> {
    fd: BorrowedFd<'fd>,
    saved: Termios,
}

impl<'fd> RawModeGuard<'fd> {
    fn engage(fd: BorrowedFd<'fd>) -> Result<Self, KeyError> {
        let saved = termios::tcgetattr(fd)?;
        let mut raw = saved.clone();
        raw.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);
        termios::tcsetattr(fd, SetArg::TCSANOW, &raw)?;
        log::trace!("terminal switched to raw mode");
        Ok(Self { fd, saved })
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = termios::tcsetattr(self.fd, SetArg::TCSANOW, &self.saved) {
            log::warn!("failed to restore terminal attributes: {}", err);
        }
    }
}

/// Reads one raw byte from `fd` with canonical mode and echo disabled.
fn read_key_from(fd: BorrowedFd<'_>) -> Result<i32, KeyError> {
    let _guard = RawModeGuard::engage(fd)?;
    let mut byte = [0u8; 1];
    loop {
        match nix::unistd::read(fd.as_raw_fd(), &mut byte) {
            Ok(0) => return Err(KeyError::Closed),
            Ok(_) => return Ok(i32::from(byte[0])),
            Err(Errno::EINTR) => continue,
            Err(err) => return Err(err.into()),
        }
    }
}

pub(super) fn read_key() -> Result<i32, KeyError> {
    let stdin = io::stdin();
    read_key_from(stdin.as_fd())
}
