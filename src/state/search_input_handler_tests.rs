//! Tests for search input editing transitions.

use super::*;
use crate::state::search_input::{SearchInput, QUERY_MAX_CHARS};

#[test]
fn char_input_appends_at_end() {
    let input = SearchInput::new();
    let input = handle_char_input(input, 'r');
    let input = handle_char_input(input, 'u');
    let input = handle_char_input(input, 's');
    let input = handle_char_input(input, 't');
    assert_eq!(input.text(), "rust");
    assert_eq!(input.cursor(), 4);
}

#[test]
fn char_input_inserts_at_cursor() {
    let mut input = SearchInput::with_text("rst");
    input = handle_cursor_left(input);
    input = handle_cursor_left(input);
    input = handle_char_input(input, 'u');
    assert_eq!(input.text(), "rust");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn char_input_handles_multibyte_neighbors() {
    let mut input = SearchInput::with_text("日語");
    input = handle_cursor_left(input);
    input = handle_char_input(input, '本');
    assert_eq!(input.text(), "日本語");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn char_input_ignored_at_max_length() {
    let long: String = "a".repeat(QUERY_MAX_CHARS);
    let input = SearchInput::with_text(long.clone());
    let input = handle_char_input(input, 'x');
    assert_eq!(input.text(), long);
}

#[test]
fn backspace_deletes_before_cursor() {
    let input = SearchInput::with_text("rust");
    let input = handle_backspace(input);
    assert_eq!(input.text(), "rus");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn backspace_mid_text() {
    let mut input = SearchInput::with_text("rust");
    input = handle_cursor_left(input);
    input = handle_backspace(input);
    assert_eq!(input.text(), "rut");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn backspace_at_start_is_noop() {
    let mut input = SearchInput::with_text("rust");
    for _ in 0..4 {
        input = handle_cursor_left(input);
    }
    let input = handle_backspace(input);
    assert_eq!(input.text(), "rust");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn backspace_removes_multibyte_character() {
    let input = SearchInput::with_text("日本語");
    let input = handle_backspace(input);
    assert_eq!(input.text(), "日本");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn cursor_left_saturates_at_zero() {
    let mut input = SearchInput::with_text("ab");
    for _ in 0..5 {
        input = handle_cursor_left(input);
    }
    assert_eq!(input.cursor(), 0);
}

#[test]
fn cursor_right_saturates_at_length() {
    let mut input = SearchInput::with_text("ab");
    for _ in 0..5 {
        input = handle_cursor_right(input);
    }
    assert_eq!(input.cursor(), 2);
}

#[test]
fn backspacing_everything_leaves_an_empty_qualifying_nothing() {
    let mut input = SearchInput::with_text("abc");
    for _ in 0..3 {
        input = handle_backspace(input);
    }
    assert_eq!(input.text(), "");
    assert_eq!(input.cursor(), 0);
    assert!(!input.qualifies());
}
