//! # Block Kinds
//!
//! Each block kind owns its syntax knowledge (markers, prefixes, fences).
//! The classifier calls into these types; it never hardcodes `#` or `>`.

pub mod block_quote;
pub mod callout;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod question;

pub use block_quote::BlockQuote;
pub use callout::{Callout, CalloutKind};
pub use code_fence::CodeFence;
pub use heading::{BoldHeading, Heading};
pub use list_item::ListItem;
pub use question::NumberedQuestion;
