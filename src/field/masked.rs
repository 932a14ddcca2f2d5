//! MaskedInput - binds a mask chain to a host field and turns edit intents
//! into chain walks and caret moves.

use crate::mask::{EditContext, MaskChain, RuleTable, DEFAULT_PLACEHOLDER, EMPTY_CHAR};

use super::host::TextField;
use super::messages::{EditIntent, MoveTarget};
use super::selection::Selection;

/// A host field constrained by a mask pattern.
///
/// The field always shows the chain's rendered text; every operation walks
/// the chain, re-renders and places the caret.
#[derive(Debug, Clone)]
pub struct MaskedInput<F: TextField> {
    field: F,
    chain: MaskChain,
    rules: RuleTable,
}

impl<F: TextField> MaskedInput<F> {
    /// Mask `field` with the built-in glyphs and the default placeholder.
    pub fn new(field: F, pattern: &str) -> Self {
        Self::with_rules(field, pattern, RuleTable::builtin(), DEFAULT_PLACEHOLDER)
    }

    pub fn with_rules(field: F, pattern: &str, rules: RuleTable, placeholder: char) -> Self {
        let chain = MaskChain::with_rules(pattern, &rules, placeholder);
        let mut input = Self {
            field,
            chain,
            rules,
        };
        let caret = input.resting_caret();
        input.display(Selection::collapsed(caret));
        input
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn into_field(self) -> F {
        self.field
    }

    pub fn chain(&self) -> &MaskChain {
        &self.chain
    }

    pub fn pattern(&self) -> &str {
        self.chain.pattern()
    }

    /// Rendered text as shown in the field
    pub fn text(&self) -> String {
        self.chain.text()
    }

    /// Unmasked slot values
    pub fn value(&self) -> String {
        self.chain.value()
    }

    pub fn is_valid(&self) -> bool {
        self.chain.is_valid()
    }

    pub fn is_complete(&self) -> bool {
        self.chain.is_complete()
    }

    pub fn selection(&self) -> Selection {
        self.field.selection()
    }

    pub fn caret(&self) -> usize {
        self.field.selection().start
    }

    /// Place the caret, snapping it forward off literal runs.
    pub fn set_caret(&mut self, caret: usize) {
        let caret = self.chain.adjusted_caret(caret, true, None).min(self.chain.len());
        self.field.set_selection(Selection::collapsed(caret));
    }

    pub fn select(&mut self, start: usize, end: usize) {
        self.field.set_selection(Selection::new(start, end));
    }

    /// Apply one intent. Returns true if the text or the caret changed.
    pub fn apply(&mut self, intent: EditIntent) -> bool {
        let text_before = self.chain.text();
        let selection_before = self.field.selection();
        if intent.is_edit() {
            tracing::debug!(?intent, caret = selection_before.start, "apply edit intent");
        } else {
            tracing::trace!(?intent, caret = selection_before.start, "apply move intent");
        }

        match intent {
            EditIntent::InsertChar(ch) => {
                self.insert_char(ch);
            }
            EditIntent::InsertText(text) => {
                self.insert_text(&text);
            }
            EditIntent::DeleteBackward => {
                self.delete_backward();
            }
            EditIntent::DeleteForward => {
                self.delete_forward();
            }
            EditIntent::Move(target) => self.move_to(target),
            EditIntent::Clear => self.clear(),
            EditIntent::SetValue(value) => self.set_value(&value),
        }

        self.chain.text() != text_before || self.field.selection() != selection_before
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Type `ch` at the caret, replacing any selection first.
    /// Returns true if the caret advanced.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut selection = self.field.selection();
        if !selection.is_empty() {
            self.blank_range(selection.start, selection.end);
            selection = Selection::collapsed(selection.start);
        }

        let start = if self.field.direction().is_forward() {
            selection.start
        } else {
            selection.start.saturating_sub(1)
        };

        let mut ctx = EditContext::text(&ch.to_string())
            .starting_at(start)
            .with_length(1);
        let advanced = self.chain.handle(&mut ctx);
        tracing::trace!(%ch, start, advanced, "insert");

        self.display(Selection::collapsed(selection.start + advanced));
        advanced > 0
    }

    /// Type each character of `text` in turn.
    pub fn insert_text(&mut self, text: &str) -> usize {
        text.chars().filter(|&ch| self.insert_char(ch)).count()
    }

    /// Backspace: empty the selection, or the nearest pattern slot before the
    /// caret, and leave the caret on the emptied slot.
    pub fn delete_backward(&mut self) -> bool {
        let selection = self.field.selection();
        if !selection.is_empty() {
            self.blank_range(selection.start, selection.end);
            self.display(Selection::collapsed(selection.start));
            return true;
        }

        let target = self.chain.adjusted_caret(selection.start, false, None);
        if target == 0 {
            self.display(Selection::collapsed(0));
            return false;
        }

        let slot = target - 1;
        let cleared = self.blank_range(slot, target);
        tracing::trace!(caret = selection.start, slot, cleared, "delete backward");
        self.display(Selection::collapsed(slot));
        cleared > 0
    }

    /// Del: empty the selection, or the first pattern slot at or after the
    /// caret. The caret stays put.
    pub fn delete_forward(&mut self) -> bool {
        let selection = self.field.selection();
        if !selection.is_empty() {
            self.blank_range(selection.start, selection.end);
            self.display(Selection::collapsed(selection.start));
            return true;
        }

        let target = self.chain.adjusted_caret(selection.start, true, None);
        if !self.chain.is_editable(target) {
            return false;
        }

        let cleared = self.blank_range(target, target + 1);
        tracing::trace!(caret = selection.start, slot = target, cleared, "delete forward");
        self.display(selection);
        cleared > 0
    }

    /// Empty every slot and put the caret on the first one.
    pub fn clear(&mut self) {
        self.chain.clear();
        let caret = self.resting_caret();
        self.display(Selection::collapsed(caret));
    }

    /// Replace the content with an unmasked value; literals are filled in.
    pub fn set_value(&mut self, value: &str) {
        self.chain.clear();
        let filled = self.chain.handle(&mut EditContext::value(value));
        tracing::debug!(filled, "set value");
        let caret = self.resting_caret();
        self.display(Selection::collapsed(caret));
    }

    /// Replace the content with already-masked text. Characters are matched to
    /// slots by position; literal positions and placeholders are ignored.
    ///
    /// A slot holding the placeholder glyph itself (a `_` in a `c` slot, say)
    /// cannot be told apart from an empty one and comes back empty, so
    /// `set_text(&text())` is not an exact round trip for such fields.
    pub fn set_text(&mut self, text: &str) {
        let placeholder = self.chain.placeholder();
        let value: String = self
            .chain
            .nodes()
            .iter()
            .zip(text.chars())
            .filter(|(node, _)| node.is_pattern())
            .map(|(_, ch)| if ch == placeholder { EMPTY_CHAR } else { ch })
            .collect();
        self.set_value(&value);
    }

    /// Switch to a new pattern, carrying the current value over slot by slot.
    pub fn set_mask(&mut self, pattern: &str) {
        let value = self.chain.value();
        self.chain.reparse(pattern, &self.rules);
        self.chain.handle(&mut EditContext::value(&value));
        tracing::debug!(pattern, "mask replaced");
        let caret = self.resting_caret();
        self.display(Selection::collapsed(caret));
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn move_to(&mut self, target: MoveTarget) {
        let selection = self.field.selection();
        let len = self.chain.len();

        let caret = match target {
            MoveTarget::Left if !selection.is_empty() => selection.start,
            MoveTarget::Right if !selection.is_empty() => selection.end,
            MoveTarget::Left => {
                let raw = selection.start.saturating_sub(1);
                self.chain.adjusted_caret(raw, false, None)
            }
            MoveTarget::Right => {
                let raw = (selection.start + 1).min(len);
                self.chain.adjusted_caret(raw, true, None).min(len)
            }
            MoveTarget::Home => self.chain.adjusted_caret(0, true, None).min(len),
            MoveTarget::End => len,
            MoveTarget::FirstEditable => self.resting_caret(),
        };

        self.field.set_selection(Selection::collapsed(caret));
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// First empty slot, or the end once every slot is filled.
    fn resting_caret(&self) -> usize {
        if self.chain.is_complete() {
            self.chain.len()
        } else {
            self.chain.first_editable()
        }
    }

    /// Empty the pattern slots in `start..end`. Returns how many were emptied.
    fn blank_range(&mut self, start: usize, end: usize) -> usize {
        let count = self.chain.pattern_slots_in(start..end);
        if count == 0 {
            return 0;
        }
        let mut ctx = EditContext::blank(count).starting_at(start);
        self.chain.handle(&mut ctx)
    }

    fn display(&mut self, selection: Selection) {
        self.field.set_text(&self.chain.text());
        self.field.set_selection(selection);
    }
}

#[cfg(test)]
mod tests {
    use super::super::host::{StringField, TextDirection};
    use super::*;

    fn masked(pattern: &str) -> MaskedInput<StringField> {
        MaskedInput::new(StringField::new(), pattern)
    }

    #[test]
    fn test_initial_display() {
        let input = masked("+1 (000) 000-0000");
        assert_eq!(input.field().as_str(), "+1 (___) ___-____");
        assert_eq!(input.caret(), 4);
    }

    #[test]
    fn test_type_sequence() {
        let mut input = masked("000-0000");
        input.insert_text("2005551234");
        assert_eq!(input.text(), "200-5551");
        assert_eq!(input.caret(), 8);
        assert!(input.is_complete());
    }

    #[test]
    fn test_rejected_char_keeps_caret() {
        let mut input = masked("(000) 000-0000");
        assert!(!input.insert_char('a'));
        assert_eq!(input.caret(), 1);
        assert_eq!(input.text(), "(___) ___-____");
    }

    #[test]
    fn test_backspace_skips_literal() {
        let mut input = masked("00-00");
        input.set_value("1234");
        input.select(3, 3);
        assert!(input.delete_backward());
        assert_eq!(input.text(), "1_-34");
        assert_eq!(input.caret(), 1);
    }

    #[test]
    fn test_backspace_at_start_does_nothing() {
        let mut input = masked("(00)");
        input.set_value("12");
        input.select(1, 1);
        assert!(!input.delete_backward());
        assert_eq!(input.text(), "(12)");
        assert_eq!(input.caret(), 0);
    }

    #[test]
    fn test_delete_forward_over_literal() {
        let mut input = masked("00-00");
        input.set_value("1234");
        input.select(2, 2);
        assert!(input.delete_forward());
        assert_eq!(input.text(), "12-_4");
        assert_eq!(input.caret(), 2);
    }

    #[test]
    fn test_delete_forward_at_end() {
        let mut input = masked("00");
        input.set_value("12");
        assert_eq!(input.caret(), 2);
        assert!(!input.delete_forward());
        assert_eq!(input.text(), "12");
    }

    #[test]
    fn test_delete_selection() {
        let mut input = masked("00-00");
        input.set_value("1234");
        input.select(1, 4);
        assert!(input.delete_backward());
        assert_eq!(input.text(), "1_-_4");
        assert_eq!(input.caret(), 1);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut input = masked("0000");
        input.set_value("1234");
        input.select(1, 3);
        assert!(input.insert_char('9'));
        assert_eq!(input.text(), "19_4");
        assert_eq!(input.caret(), 2);
    }

    #[test]
    fn test_right_to_left_inserts_before_caret() {
        let field = StringField::with_direction(TextDirection::RightToLeft);
        let mut input = MaskedInput::new(field, "000");
        input.select(2, 2);
        input.insert_char('7');
        assert_eq!(input.text(), "_7_");
        assert_eq!(input.caret(), 3);
    }

    #[test]
    fn test_movement_skips_literals() {
        let mut input = masked("00) 00");
        input.select(2, 2);
        input.move_to(MoveTarget::Right);
        assert_eq!(input.caret(), 4);
        input.move_to(MoveTarget::Left);
        assert_eq!(input.caret(), 2);
        input.move_to(MoveTarget::End);
        assert_eq!(input.caret(), 6);
        input.move_to(MoveTarget::Home);
        assert_eq!(input.caret(), 0);
    }

    #[test]
    fn test_home_skips_leading_literals() {
        let mut input = masked("+1 (000)");
        input.move_to(MoveTarget::End);
        input.move_to(MoveTarget::Home);
        assert_eq!(input.caret(), 4);
    }

    #[test]
    fn test_set_text_masked() {
        let mut input = masked("(000) 000-0000");
        input.set_text("(555) 123-4567");
        assert_eq!(input.text(), "(555) 123-4567");
        assert_eq!(input.value(), "5551234567");
        assert!(input.is_valid());
    }

    #[test]
    fn test_set_text_with_placeholders() {
        let mut input = masked("00-00");
        input.set_text("1_-_4");
        assert_eq!(input.text(), "1_-_4");
        assert_eq!(input.caret(), 1);
        assert!(!input.is_valid());
    }

    #[test]
    fn test_set_mask_keeps_value() {
        let mut input = masked("000-000");
        input.set_value("123456");
        input.set_mask("00.00.00");
        assert_eq!(input.text(), "12.34.56");
        assert_eq!(input.pattern(), "00.00.00");
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut input = masked("00");
        assert!(input.apply(EditIntent::InsertChar('1')));
        assert!(!input.apply(EditIntent::InsertChar('x')));
        assert!(input.apply(EditIntent::Move(MoveTarget::Home)));
        assert!(!input.apply(EditIntent::Move(MoveTarget::Home)));
        assert!(input.apply(EditIntent::Clear));
        assert_eq!(input.text(), "__");
    }

    #[test]
    fn test_set_caret_snaps_forward() {
        let mut input = masked("0--0");
        input.set_caret(1);
        assert_eq!(input.caret(), 3);
    }

    #[test]
    fn test_set_text_treats_placeholder_value_as_empty() {
        let mut input = masked("cc");
        input.set_value("_a");
        assert_eq!(input.text(), "_a");
        assert!(input.is_complete());

        let text = input.text();
        input.set_text(&text);
        assert_eq!(input.text(), "_a");
        assert_eq!(input.value(), " a");
        assert!(!input.is_complete());
    }

    #[test]
    fn test_long_rejected_value() {
        let mut input = masked("(000) 000-0000");
        input.set_value(&"-".repeat(100_000));
        assert_eq!(input.text(), "(___) ___-____");
        assert_eq!(input.caret(), 1);
    }
}
