//! Caret selection in a single-line field.

/// Selected range in char offsets. `start == end` is a plain caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build a selection, ordering the ends.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Caret with no selection
    pub const fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends to `max`.
    pub fn clamped(self, max: usize) -> Self {
        Self::new(self.start.min(max), self.end.min(max))
    }
}
