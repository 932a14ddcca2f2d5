//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use inputmask::field::{EditIntent, MaskedInput, MoveTarget, Selection, StringField, TextField};
use inputmask::mask::{EditContext, MaskChain};

/// Create a masked field with the caret where the mask puts it initially
pub fn test_input(pattern: &str) -> MaskedInput<StringField> {
    MaskedInput::new(StringField::new(), pattern)
}

/// Create a masked field holding `value` with the caret at `caret`
pub fn test_input_with_value(pattern: &str, value: &str, caret: usize) -> MaskedInput<StringField> {
    let mut input = test_input(pattern);
    input.set_value(value);
    input.select(caret, caret);
    input
}

/// Type every character of `keys` as separate keystrokes
pub fn type_keys(input: &mut MaskedInput<StringField>, keys: &str) {
    for ch in keys.chars() {
        input.apply(EditIntent::InsertChar(ch));
    }
}

pub fn backspace(input: &mut MaskedInput<StringField>) -> bool {
    input.apply(EditIntent::DeleteBackward)
}

pub fn delete(input: &mut MaskedInput<StringField>) -> bool {
    input.apply(EditIntent::DeleteForward)
}

pub fn move_caret(input: &mut MaskedInput<StringField>, target: MoveTarget) {
    input.apply(EditIntent::Move(target));
}

/// The text the host field is displaying
pub fn shown(input: &MaskedInput<StringField>) -> String {
    input.field().text()
}

pub fn shown_selection(input: &MaskedInput<StringField>) -> Selection {
    input.field().selection()
}

/// Run a typed-text walk on a bare chain starting at `caret`
pub fn walk_text(chain: &mut MaskChain, caret: usize, text: &str) -> usize {
    chain.handle(&mut EditContext::text(text).starting_at(caret))
}

/// Patterns exercised by property-style tests
pub const PATTERNS: &[&str] = &[
    "",
    "0",
    "000-0000",
    "(000) 000-0000",
    "+1 (000) 000-0000",
    "\\000",
    "00/00/0000",
    "LL-0000-aa",
    "#99.99",
    "CCCC cccc",
    "\\\\0\\",
    "---",
];
