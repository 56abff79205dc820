//! Console Toolkit demo - a scripted walkthrough of the library
//!
//! Runs each helper once: menu selection, bounded integer entry, constrained
//! character entry, an unbuffered key read, then the color, bit-printing and
//! sleep extras.

use std::io::{self, Write};

use anyhow::Result;

use console_toolkit::input::unbuffered;
use console_toolkit::utils::{print_bits, sleep_ms};
use console_toolkit::{color, CharPrompt, IntPrompt, Menu};

fn main() -> Result<()> {
    env_logger::init();

    // Menu selection: 1-indexed on screen, 0-indexed on return.
    let options = ["Option A", "Option B", "Option C"];
    let selection = Menu::new(&options).read()?;
    println!("You selected {} -> \"{}\".", selection, options[selection]);

    // Bounded integer entry.
    let number = IntPrompt::new()
        .prompt("Enter a number between 1-10: ")
        .range(1, 10)
        .read()?;
    println!("You entered: {}", number);

    // Constrained character entry.
    let letter = CharPrompt::new()
        .prompt("Enter a, b, or c: ")
        .allow(&['a', 'b', 'c'])
        .read()?;
    println!("You entered: '{}'", letter);

    // Unbuffered key read: no enter required, code 0 on failure. Special
    // keys (esc, function keys, arrows) come back as their raw codes and
    // may print strangely, so show the number alongside the character.
    print!("Press any key: ");
    io::stdout().flush()?;
    let key = unbuffered::read_key();
    let shown = char::from_u32(key as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
    println!();
    println!("You entered: '{}' (code {})", shown, key);

    // Colors.
    println!("{}Color!{}", color::BLUE, color::RESET);

    // Bit printing.
    print!("Bits: ");
    print_bits(&b'a');

    // Sleep.
    print!("Waiting 1 second... ");
    io::stdout().flush()?;
    sleep_ms(1000);
    println!("Done!");

    println!("Goodbye~");
    Ok(())
}
