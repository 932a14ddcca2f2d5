//! inputmask - rule-chain input masks for single-line text fields
//!
//! A mask pattern is parsed into a chain of per-slot rules. Typed characters
//! are walked through the chain, which accepts, rejects, or steps over literal
//! slots, and renders the field text with placeholders for unfilled slots.

pub mod config;
pub mod config_paths;
pub mod field;
pub mod mask;
pub mod tracing;

// Re-export commonly used types
pub use config::MaskConfig;
pub use field::{EditIntent, MaskedInput, MoveTarget, Selection, StringField, TextField};
pub use mask::{CharClass, CharRule, EditContext, MaskChain, RuleTable};
