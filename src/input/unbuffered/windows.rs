//! Windows console backend
//!
//! Polls the standard input console's event queue, skipping everything that
//! is not a key-down event, and returns the first pressed key's character
//! code. No terminal mode needs saving here; reading the event queue
//! bypasses line buffering and echo entirely.

use std::io;
use std::thread;
use std::time::Duration;

use winapi::um::consoleapi::ReadConsoleInputW;
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
use winapi::um::processenv::GetStdHandle;
use winapi::um::winbase::STD_INPUT_HANDLE;
use winapi::um::wincon::{INPUT_RECORD, KEY_EVENT};

use super::KeyError;

// Nap between polls so a burst of non-key events (focus, resize, mouse)
// cannot spin the CPU.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

pub(super) fn read_key() -> Result<i32, KeyError> {
    let handle = unsafe { GetStdHandle(STD_INPUT_HANDLE) };
    if handle == INVALID_HANDLE_VALUE || handle.is_null() {
        return Err(KeyError::InvalidHandle);
    }

    loop {
        let mut record: INPUT_RECORD = unsafe { std::mem::zeroed() };
        let mut records_read: u32 = 0;
        let ok = unsafe { ReadConsoleInputW(handle, &mut record, 1, &mut records_read) };
        if ok == 0 {
            return Err(KeyError::Console(io::Error::last_os_error()));
        }

        if records_read > 0 && record.EventType == KEY_EVENT {
            let key = unsafe { record.Event.KeyEvent() };
            if key.bKeyDown != 0 {
                let code = unsafe { *key.uChar.UnicodeChar() };
                return Ok(i32::from(code));
            }
        }

        thread::sleep(POLL_INTERVAL);
    }
}
