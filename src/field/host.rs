//! Host text field abstraction.
//!
//! The mask only needs to read and place the caret and to push the rendered
//! text. [`TextField`] captures that; [`StringField`] is an in-memory field
//! for tests and the command-line driver.

use super::selection::Selection;

/// Layout direction of the host field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    pub fn is_forward(self) -> bool {
        self == TextDirection::LeftToRight
    }
}

/// What the mask needs from the widget that displays it.
pub trait TextField {
    /// Currently displayed text
    fn text(&self) -> String;

    /// Replace the displayed text
    fn set_text(&mut self, text: &str);

    /// Current caret/selection in char offsets
    fn selection(&self) -> Selection;

    /// Move the caret/selection
    fn set_selection(&mut self, selection: Selection);

    fn direction(&self) -> TextDirection {
        TextDirection::LeftToRight
    }

    /// Length of the displayed text in chars
    fn len_chars(&self) -> usize {
        self.text().chars().count()
    }
}

// =============================================================================
// StringField - in-memory host
// =============================================================================

/// TextField backed by a `String`. Selections are clamped to the text.
#[derive(Debug, Clone, Default)]
pub struct StringField {
    text: String,
    selection: Selection,
    direction: TextDirection,
}

impl StringField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(direction: TextDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Caret position (start of the selection)
    pub fn caret(&self) -> usize {
        self.selection.start
    }
}

impl TextField for StringField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        let len = self.len_chars();
        self.selection = self.selection.clamped(len);
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        let len = self.len_chars();
        self.selection = selection.clamped(len);
    }

    fn direction(&self) -> TextDirection {
        self.direction
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}
