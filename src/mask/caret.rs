//! Caret adjustment over a mask chain.
//!
//! A raw caret offset may sit inside a run of literals. These walks map it to
//! an offset next to an editable slot, looking forward or backward.

use super::chain::MaskChain;
use super::node::NodeKind;

/// Result of a caret walk that stopped at a node.
///
/// A stop answer of 0 falls back to the offset just past the last pattern
/// slot walked over, if any.
fn settle(stop: usize, last_pattern: Option<usize>) -> usize {
    match (stop, last_pattern) {
        (0, Some(at)) => at + 1,
        _ => stop,
    }
}

impl MaskChain {
    /// Snap `caret` in the given direction.
    ///
    /// `ch` is the character about to be typed, if any. Moving forward, a
    /// literal stops the walk when `ch` is the placeholder it would accept,
    /// or when the caret sits right after a literal that was just accepted.
    /// Forward results are never below `caret`.
    pub fn adjusted_caret(&self, caret: usize, forward: bool, ch: Option<char>) -> usize {
        if self.is_empty() {
            return 0;
        }
        if forward {
            self.forward_from(caret, ch)
        } else {
            self.backward_from(caret)
        }
    }

    fn forward_from(&self, caret: usize, ch: Option<char>) -> usize {
        let mut last_pattern = None;

        for (at, node) in self.nodes.iter().enumerate() {
            match node.kind() {
                NodeKind::Terminal => return settle(caret, last_pattern),
                NodeKind::Pattern { .. } => {
                    if at >= caret {
                        return settle(at, last_pattern);
                    }
                    last_pattern = Some(at);
                }
                NodeKind::Literal(_) => {
                    if at >= caret && ch == Some(self.placeholder) {
                        return settle(at, last_pattern);
                    }
                    if caret == at + 1 && node.is_accepted() {
                        return settle(caret, last_pattern);
                    }
                }
            }
        }

        settle(caret, last_pattern)
    }

    fn backward_from(&self, caret: usize) -> usize {
        let mut last_pattern = None;

        for (at, node) in self.nodes.iter().enumerate() {
            let before_caret = at + 1 >= caret;
            match node.kind() {
                NodeKind::Terminal => return settle(caret, last_pattern),
                NodeKind::Pattern { .. } => {
                    if before_caret {
                        return settle(caret, last_pattern);
                    }
                    last_pattern = Some(at);
                }
                NodeKind::Literal(_) => {
                    if before_caret {
                        return settle(0, last_pattern);
                    }
                }
            }
        }

        settle(caret, last_pattern)
    }
}
