//! Edit context threaded through a chain walk.

use super::rules::EMPTY_CHAR;

/// How literal slots treat the incoming characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Characters as typed by the user. Literals are stepped over and earn
    /// caret credit.
    Text,
    /// An unmasked value forced into the pattern slots. Literals are skipped
    /// silently.
    Value,
}

/// State carried from node to node during one edit walk.
#[derive(Debug, Clone)]
pub struct EditContext {
    input: Vec<char>,
    /// Next unconsumed position in `input`
    cursor: usize,
    mode: InputMode,
    /// Slots to skip before applying input
    pub(crate) start: usize,
    /// Remaining length budget
    pub(crate) length: usize,
    /// Absolute slot index of the node being visited
    pub(crate) index: usize,
    /// Rendered text, updated as slots accept characters
    pub(crate) full_text: Vec<char>,
}

impl EditContext {
    /// Typed input; the length budget defaults to the input length.
    pub fn text(input: &str) -> Self {
        Self::new(input, InputMode::Text)
    }

    /// Forced value; the length budget defaults to the input length.
    pub fn value(input: &str) -> Self {
        Self::new(input, InputMode::Value)
    }

    /// `count` empty markers forced as a value, used to blank slots.
    pub fn blank(count: usize) -> Self {
        Self::value(&EMPTY_CHAR.to_string().repeat(count))
    }

    fn new(input: &str, mode: InputMode) -> Self {
        let input: Vec<char> = input.chars().collect();
        Self {
            length: input.len(),
            input,
            cursor: 0,
            mode,
            start: 0,
            index: 0,
            full_text: Vec::new(),
        }
    }

    /// Skip `start` slots before applying input.
    pub fn starting_at(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Limit the number of units the walk may consume.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Input not yet consumed by the walk.
    pub fn remaining(&self) -> &[char] {
        &self.input[self.cursor.min(self.input.len())..]
    }

    /// Rendered text as left by the last walk.
    pub fn full_text(&self) -> String {
        self.full_text.iter().collect()
    }

    /// Prepare for a walk from the chain head over `rendered`.
    pub(crate) fn begin(&mut self, rendered: Vec<char>) {
        self.index = 0;
        self.full_text = rendered;
    }

    /// The pending character, if the walk may still consume one.
    pub(crate) fn head(&self) -> Option<char> {
        if self.length == 0 {
            return None;
        }
        self.input.get(self.cursor).copied()
    }

    /// Consume the pending character and one unit of budget.
    pub(crate) fn consume(&mut self) {
        self.cursor += 1;
        self.length = self.length.saturating_sub(1);
    }

    /// Move to the successor slot.
    pub(crate) fn advance_slot(&mut self) {
        self.index += 1;
        self.start = self.start.saturating_sub(1);
    }
}
