//! Rule-chain input masks.
//!
//! A mask pattern such as `+1 (000) 000-0000` is parsed into a chain with one
//! node per template slot:
//!
//! - pattern slots (`0`, `9`, `#`, `L`, `l`, `C`, `c`, `A`, `a`, or glyphs
//!   registered in a [`RuleTable`]) accept characters that pass their rule
//! - literal slots carry a fixed character; `\` escapes any glyph into one
//! - a terminal node ends the chain
//!
//! # Architecture
//!
//! - [`MaskChain`]: the parsed chain; renders text and values, answers validity
//!   and caret queries
//! - [`EditContext`]: input, start offset, length budget and rendered text
//!   threaded through one edit walk
//! - [`RuleNode`] / [`NodeKind`]: a single slot and its variant
//! - [`RuleTable`] / [`CharRule`] / [`CharClass`]: glyph predicates
//!
//! # Example
//!
//! ```ignore
//! use inputmask::mask::{EditContext, MaskChain};
//!
//! let mut chain = MaskChain::new("000-0000");
//! let advanced = chain.handle(&mut EditContext::text("5551234"));
//!
//! assert_eq!(chain.text(), "555-1234");
//! assert_eq!(advanced, 8);
//! ```

mod caret;
mod chain;
mod context;
mod node;
mod parser;
mod rules;

pub use chain::MaskChain;
pub use context::{EditContext, InputMode};
pub use node::{NodeKind, RuleNode};
pub use parser::{parse, slot_count};
pub use rules::{
    is_letter, CharClass, CharRule, ContextFilter, RuleTable, DEFAULT_PLACEHOLDER, EMPTY_CHAR,
    ESCAPE_CHAR,
};
