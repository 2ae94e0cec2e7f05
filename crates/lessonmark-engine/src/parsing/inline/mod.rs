//! # Inline Expansion
//!
//! Expands the small inline markup subset models emit (bold, italic, inline
//! code) into HTML markup.
//!
//! ## Pass Order
//!
//! Passes run in a fixed order: bold, then italic, then code. Bold first
//! keeps `**x**` from being read as nested italics. Input text is
//! HTML-escaped before any pass so model output cannot inject tags.
//!
//! Code blocks are never passed through here; the render layer shows their
//! content verbatim.

pub mod expand;
pub mod kinds;

pub use expand::{escape, expand_inline};
