//! Edit intents a host hands to a masked field.

/// Target for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// One slot left, stepping back over literals
    Left,
    /// One slot right, stepping over literals
    Right,
    /// Start of the field
    Home,
    /// End of the field
    End,
    /// First empty pattern slot
    FirstEditable,
}

/// Host-level edit intent, already decoded from device input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Type a single character at the caret
    InsertChar(char),
    /// Type a string one character at a time (paste)
    InsertText(String),
    /// Backspace
    DeleteBackward,
    /// Del
    DeleteForward,
    /// Move the caret
    Move(MoveTarget),
    /// Empty every slot
    Clear,
    /// Replace the unmasked value
    SetValue(String),
}

impl EditIntent {
    /// Whether this intent can change slot contents.
    pub fn is_edit(&self) -> bool {
        !matches!(self, EditIntent::Move(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_edit() {
        assert!(EditIntent::InsertChar('1').is_edit());
        assert!(EditIntent::DeleteBackward.is_edit());
        assert!(EditIntent::Clear.is_edit());
        assert!(!EditIntent::Move(MoveTarget::Left).is_edit());
    }
}
