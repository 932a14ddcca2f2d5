//! The rule chain and its edit walk.
//!
//! Nodes are stored flat; the successor of node `i` is node `i + 1` and the
//! last node is always the terminal. Walks step from the head one node at a
//! time in a loop, so long masks and long inputs need no extra stack.

use std::ops::Range;

use super::context::{EditContext, InputMode};
use super::node::RuleNode;
use super::parser;
use super::rules::{RuleTable, DEFAULT_PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Terminal,
    Pattern,
    Literal,
}

/// Parsed mask: one node per template slot plus the terminal.
#[derive(Debug, Clone)]
pub struct MaskChain {
    pattern: String,
    pub(super) nodes: Vec<RuleNode>,
    pub(super) placeholder: char,
}

impl MaskChain {
    /// Parse with the built-in glyphs and the default placeholder.
    pub fn new(pattern: &str) -> Self {
        Self::with_rules(pattern, &RuleTable::builtin(), DEFAULT_PLACEHOLDER)
    }

    pub fn with_rules(pattern: &str, rules: &RuleTable, placeholder: char) -> Self {
        Self {
            pattern: pattern.to_string(),
            nodes: parser::parse(pattern, rules),
            placeholder,
        }
    }

    /// Replace every node with a fresh parse of `pattern`. Slot state is lost.
    pub fn reparse(&mut self, pattern: &str, rules: &RuleTable) {
        self.nodes = parser::parse(pattern, rules);
        self.pattern = pattern.to_string();
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Number of slots, terminal excluded. Equals the rendered text length.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nodes(&self) -> &[RuleNode] {
        &self.nodes[..self.len()]
    }

    pub fn slot(&self, offset: usize) -> Option<&RuleNode> {
        self.nodes().get(offset)
    }

    /// True when `offset` is a pattern slot.
    pub fn is_editable(&self, offset: usize) -> bool {
        self.slot(offset).is_some_and(RuleNode::is_pattern)
    }

    /// Number of pattern slots whose offset falls in `range`.
    pub fn pattern_slots_in(&self, range: Range<usize>) -> usize {
        self.nodes()
            .iter()
            .enumerate()
            .filter(|(i, node)| range.contains(i) && node.is_pattern())
            .count()
    }

    fn slot_kind(&self, at: usize) -> Slot {
        let node = &self.nodes[at];
        if node.is_pattern() {
            Slot::Pattern
        } else if node.is_literal() {
            Slot::Literal
        } else {
            Slot::Terminal
        }
    }

    fn rendered(&self) -> Vec<char> {
        self.nodes
            .iter()
            .filter_map(|node| node.display_char(self.placeholder))
            .collect()
    }

    /// Display text: filled values, placeholders, and literals.
    pub fn text(&self) -> String {
        self.rendered().into_iter().collect()
    }

    /// Pattern slot values only, with [`EMPTY_CHAR`](super::EMPTY_CHAR) for
    /// empty slots.
    pub fn value(&self) -> String {
        self.nodes.iter().filter_map(RuleNode::value_char).collect()
    }

    /// Every slot holds a value its rule accepts.
    pub fn is_valid(&self) -> bool {
        let full_text = self.rendered();
        self.nodes
            .iter()
            .enumerate()
            .all(|(index, node)| node.is_valid(index, &full_text))
    }

    /// No pattern slot is empty.
    pub fn is_complete(&self) -> bool {
        !self.nodes.iter().any(RuleNode::is_empty_slot)
    }

    /// Whether the last edit attempt at `offset` succeeded.
    pub fn is_accepted(&self, offset: usize) -> bool {
        self.slot(offset).is_some_and(RuleNode::is_accepted)
    }

    /// Offset of the first empty pattern slot, or 0 when none is empty.
    pub fn first_editable(&self) -> usize {
        self.nodes
            .iter()
            .position(RuleNode::is_empty_slot)
            .unwrap_or(0)
    }

    /// Run an edit walk from the chain head.
    ///
    /// Returns the number of slots the caret should advance by: one per
    /// accepted character plus one per literal stepped over while typing.
    pub fn handle(&mut self, ctx: &mut EditContext) -> usize {
        ctx.begin(self.rendered());
        let count = self.walk_from(0, ctx);
        tracing::trace!(
            pattern = %self.pattern,
            mode = ?ctx.mode(),
            count,
            "edit walk"
        );
        count
    }

    fn walk_from(&mut self, mut at: usize, ctx: &mut EditContext) -> usize {
        let mut count = 0;

        while let Some(ch) = ctx.head() {
            match self.slot_kind(at) {
                Slot::Terminal => break,
                Slot::Pattern => {
                    if ctx.start > 0 {
                        ctx.advance_slot();
                        at += 1;
                        continue;
                    }

                    let placeholder = self.placeholder;
                    let accepted =
                        self.nodes[at].try_accept(ch, ctx.index, &mut ctx.full_text, placeholder);
                    ctx.consume();

                    // rejected input is spent; the same slot tries the next character
                    if accepted {
                        ctx.advance_slot();
                        at += 1;
                        count += 1;
                    }
                }
                Slot::Literal => {
                    if ctx.start > 0 || ctx.mode() == InputMode::Value {
                        ctx.advance_slot();
                        at += 1;
                        continue;
                    }

                    let placeholder = self.placeholder;
                    if self.nodes[at].try_accept(ch, ctx.index, &mut ctx.full_text, placeholder) {
                        ctx.consume();
                    }
                    ctx.advance_slot();
                    at += 1;
                    count += 1;
                }
            }
        }

        count
    }

    /// Empty every pattern slot and drop all acceptance flags.
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            node.clear();
        }
    }

    /// Drop all acceptance flags, keeping values.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }
}
