//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters and output tags.
//! The expander builds its patterns from these constants; it never
//! hardcodes `**` or `` ` ``.
//!
//! ## Types
//!
//! - **`Bold`**: `**text**` → `<strong>`
//! - **`Italic`**: `*text*` → `<em>`
//! - **`CodeSpan`**: `` `text` `` → `<code>`

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
