//! Small conveniences: sleeping and bit-level debugging

use std::thread;
use std::time::Duration;

/// Blocks the current thread for `millis` milliseconds.
pub fn sleep_ms(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}

/// Integer types whose raw bits can be rendered for debugging.
///
/// Bytes are rendered least-significant first, bit 0 first within each
/// byte, separated by spaces.
///
/// # Example
///
/// ```
/// use console_toolkit::utils::Bits;
///
/// // 'a' is 97, 0b0110_0001
/// assert_eq!(97u8.format_bits(), "10000110");
/// assert_eq!(97u16.format_bits(), "10000110 00000000");
/// ```
pub trait Bits {
    /// Renders the value's raw bits as a string.
    fn format_bits(&self) -> String;
}

macro_rules! impl_bits {
    ($($ty:ty),* $(,)?) => {$(
        impl Bits for $ty {
            fn format_bits(&self) -> String {
                let bytes = self.to_le_bytes();
                let mut out = String::with_capacity(bytes.len() * 9);
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    for bit in 0..8 {
                        out.push(if byte >> bit & 1 == 1 { '1' } else { '0' });
                    }
                }
                out
            }
        }
    )*};
}

impl_bits!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

/// Prints the raw bits of `value` to stdout on one line.
pub fn print_bits<T: Bits>(value: &T) {
    println!("{}", value.format_bits());
}
