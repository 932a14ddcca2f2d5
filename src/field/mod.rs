//! Host-facing side of the mask.
//!
//! A host widget implements [`TextField`] (text sink plus caret provider),
//! decodes its device input into [`EditIntent`]s, and hands them to a
//! [`MaskedInput`], which walks the mask chain and updates the field.
//!
//! # Example
//!
//! ```ignore
//! use inputmask::field::{EditIntent, MaskedInput, StringField};
//!
//! let mut input = MaskedInput::new(StringField::new(), "(000) 000-0000");
//! input.insert_text("5551234567");
//! input.apply(EditIntent::DeleteBackward);
//!
//! assert_eq!(input.text(), "(555) 123-456_");
//! ```

mod host;
mod masked;
mod messages;
mod selection;

pub use host::{StringField, TextDirection, TextField};
pub use masked::MaskedInput;
pub use messages::{EditIntent, MoveTarget};
pub use selection::Selection;
