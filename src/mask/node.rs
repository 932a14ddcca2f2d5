//! Rule nodes: one per template slot.

use super::rules::{CharRule, EMPTY_CHAR};

/// What a slot does with the characters offered to it.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// End of the chain; every operation is a no-op.
    Terminal,
    /// Editable slot governed by a rule.
    Pattern { glyph: char, rule: CharRule },
    /// Fixed character demanded by the template.
    Literal(char),
}

/// One slot of a mask chain.
#[derive(Debug, Clone)]
pub struct RuleNode {
    kind: NodeKind,
    /// `None` while the slot is empty
    value: Option<char>,
    /// Whether the most recent edit attempt at this slot succeeded
    accepted: bool,
}

impl RuleNode {
    pub fn terminal() -> Self {
        Self::with_kind(NodeKind::Terminal)
    }

    pub fn pattern(glyph: char, rule: CharRule) -> Self {
        Self::with_kind(NodeKind::Pattern { glyph, rule })
    }

    pub fn literal(ch: char) -> Self {
        Self::with_kind(NodeKind::Literal(ch))
    }

    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            accepted: false,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal)
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self.kind, NodeKind::Pattern { .. })
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Literal(_))
    }

    pub fn value(&self) -> Option<char> {
        self.value
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// True for a pattern slot that has not been filled.
    pub fn is_empty_slot(&self) -> bool {
        self.is_pattern() && self.value.is_none()
    }

    /// Character this slot contributes to the rendered text.
    pub fn display_char(&self, placeholder: char) -> Option<char> {
        match &self.kind {
            NodeKind::Terminal => None,
            NodeKind::Pattern { .. } => Some(self.value.unwrap_or(placeholder)),
            NodeKind::Literal(ch) => Some(*ch),
        }
    }

    /// Character this slot contributes to the unmasked value. Literals
    /// contribute nothing; empty slots contribute [`EMPTY_CHAR`].
    pub fn value_char(&self) -> Option<char> {
        match self.kind {
            NodeKind::Pattern { .. } => Some(self.value.unwrap_or(EMPTY_CHAR)),
            _ => None,
        }
    }

    /// Offer `ch` to the slot.
    ///
    /// Pattern slots always take [`EMPTY_CHAR`] (which empties them) and take
    /// anything else their rule allows, writing the shown glyph into
    /// `full_text[index]`. Literal slots only take the placeholder and never
    /// change. Returns the new `accepted` flag.
    pub fn try_accept(
        &mut self,
        ch: char,
        index: usize,
        full_text: &mut [char],
        placeholder: char,
    ) -> bool {
        self.accepted = false;

        match &self.kind {
            NodeKind::Terminal => {}
            NodeKind::Literal(_) => {
                self.accepted = ch == placeholder;
            }
            NodeKind::Pattern { rule, .. } => {
                if ch != EMPTY_CHAR && !rule.accepts(ch, index, full_text) {
                    return false;
                }
                let (value, shown) = if ch == EMPTY_CHAR {
                    (None, placeholder)
                } else {
                    (Some(ch), ch)
                };
                if let Some(slot) = full_text.get_mut(index) {
                    *slot = shown;
                }
                self.value = value;
                self.accepted = true;
            }
        }

        self.accepted
    }

    /// Whether the stored value satisfies the slot. Empty pattern slots are
    /// checked as [`EMPTY_CHAR`], so optional glyphs like `9` pass.
    pub fn is_valid(&self, index: usize, full_text: &[char]) -> bool {
        match &self.kind {
            NodeKind::Pattern { rule, .. } => {
                rule.accepts(self.value.unwrap_or(EMPTY_CHAR), index, full_text)
            }
            _ => true,
        }
    }

    /// Empty the slot and forget the last acceptance.
    pub fn clear(&mut self) {
        if self.is_pattern() {
            self.value = None;
        }
        self.accepted = false;
    }

    pub fn reset(&mut self) {
        self.accepted = false;
    }
}
