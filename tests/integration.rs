//! Integration tests for Console Toolkit
//!
//! These drive the prompt loops end to end through in-memory readers and
//! writers: display format, retry behavior, message selection, and the
//! values finally returned.

use std::io::Cursor;

use console_toolkit::{CharPrompt, InputError, IntPrompt, Menu};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_menu(options: &[&str], input: &str) -> (usize, String) {
    let mut out = Vec::new();
    let index = Menu::new(options)
        .read_from(Cursor::new(input), &mut out)
        .unwrap();
    (index, String::from_utf8(out).unwrap())
}

fn run_int(prompt: &IntPrompt, input: &str) -> (i64, String) {
    let mut out = Vec::new();
    let value = prompt.read_from(Cursor::new(input), &mut out).unwrap();
    (value, String::from_utf8(out).unwrap())
}

fn run_char(prompt: &CharPrompt, input: &str) -> (char, String) {
    let mut out = Vec::new();
    let value = prompt.read_from(Cursor::new(input), &mut out).unwrap();
    (value, String::from_utf8(out).unwrap())
}

// ---------------------------------------------------------------------------
// Menu selection
// ---------------------------------------------------------------------------

#[test]
fn menu_prints_options_then_prompt() {
    let (_, out) = run_menu(&["Option A", "Option B", "Option C"], "1\n");
    assert_eq!(out, "1: Option A\n2: Option B\n3: Option C\nSelect an option: ");
}

#[test]
fn menu_returns_zero_based_index() {
    let (index, _) = run_menu(&["Option A", "Option B", "Option C"], "2\n");
    assert_eq!(index, 1);
}

#[test]
fn menu_every_ordinal_for_every_size() {
    for n in 2..=9 {
        let owned: Vec<String> = (1..=n).map(|i| format!("Option {}", i)).collect();
        let options: Vec<&str> = owned.iter().map(String::as_str).collect();
        for k in 1..=n {
            let (index, _) = run_menu(&options, &format!("{}\n", k));
            assert_eq!(index, k - 1, "ordinal {} of {} options", k, n);
        }
    }
}

#[test]
fn menu_rejects_everything_until_valid() {
    let (index, out) = run_menu(&["A", "B", "C"], "0\n4\nbanana\n-1\n3\n");
    assert_eq!(index, 2);
    assert_eq!(out.matches("Please enter a valid option!").count(), 4);
    assert_eq!(out.matches("Select an option: ").count(), 5);
}

#[test]
fn menu_does_not_return_on_eof() {
    let mut out = Vec::new();
    let result = Menu::new(&["A", "B"]).read_from(Cursor::new("7\n"), &mut out);
    assert!(matches!(result, Err(InputError::Eof)));
}

// ---------------------------------------------------------------------------
// Bounded integer entry
// ---------------------------------------------------------------------------

#[test]
fn int_round_trip_without_errors() {
    let prompt = IntPrompt::new().range(1, 10);
    let (value, out) = run_int(&prompt, "5\n");
    assert_eq!(value, 5);
    assert_eq!(out, "Enter an integer: ");
}

#[test]
fn int_two_failures_then_success() {
    let prompt = IntPrompt::new().range(1, 10);
    let (value, out) = run_int(&prompt, "x\n15\n4\n");
    assert_eq!(value, 4);
    assert_eq!(out.matches("Invalid input. Try again!").count(), 1);
    assert_eq!(out.matches("Input too big. Try again!").count(), 1);
    assert_eq!(out.matches("Enter an integer: ").count(), 3);
}

#[test]
fn int_never_returns_out_of_range() {
    let prompt = IntPrompt::new().range(-5, 5);
    for input in ["-6\n0\n", "6\n-5\n", "100\n-100\n5\n"] {
        let (value, _) = run_int(&prompt, input);
        assert!((-5..=5).contains(&value), "returned {} for {:?}", value, input);
    }
}

#[test]
fn int_distinct_messages_for_each_direction() {
    let prompt = IntPrompt::new()
        .range(10, 20)
        .too_big_message("TOO BIG")
        .too_small_message("TOO SMALL");
    let (value, out) = run_int(&prompt, "25\n5\n15\n");
    assert_eq!(value, 15);
    assert_eq!(out.matches("TOO BIG").count(), 1);
    assert_eq!(out.matches("TOO SMALL").count(), 1);
}

// ---------------------------------------------------------------------------
// Constrained character entry
// ---------------------------------------------------------------------------

#[test]
fn char_allow_list_scenario() {
    let prompt = CharPrompt::new().allow(&['a', 'b', 'c']);
    let (value, out) = run_char(&prompt, "d\nb\n");
    assert_eq!(value, 'b');
    assert_eq!(out.matches("Invalid input. Try again!").count(), 1);
}

#[test]
fn char_empty_allow_list_accepts_anything() {
    let prompt = CharPrompt::new();
    for input in ["q\n", "Z\n", "#\n", "0\n"] {
        let (value, out) = run_char(&prompt, input);
        assert_eq!(value, input.chars().next().unwrap());
        assert!(!out.contains("Try again!"));
    }
}

#[test]
fn char_only_allow_list_members_returned() {
    let allowed = ['y', 'n'];
    let prompt = CharPrompt::new().allow(&allowed);
    let (value, _) = run_char(&prompt, "a\nb\nmaybe\nn\n");
    assert!(allowed.contains(&value));
}

// ---------------------------------------------------------------------------
// Shared token handling
// ---------------------------------------------------------------------------

#[test]
fn blank_lines_do_not_count_as_failures() {
    let prompt = IntPrompt::new().range(1, 10);
    let (value, out) = run_int(&prompt, "\n\n7\n");
    assert_eq!(value, 7);
    assert!(!out.contains("Try again!"));
}

#[test]
fn malformed_line_remainder_is_discarded() {
    // "abc 5" fails as one entry; the 5 on the same line must not be
    // picked up as the next token.
    let prompt = IntPrompt::new().range(1, 10);
    let (value, out) = run_int(&prompt, "abc 5\n8\n");
    assert_eq!(value, 8);
    assert_eq!(out.matches("Invalid input. Try again!").count(), 1);
}
