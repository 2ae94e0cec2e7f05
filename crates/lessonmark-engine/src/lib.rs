//! Parser and renderer for semi-structured educational text produced by a
//! language model.
//!
//! Raw text flows one way: [`RawContent`] → [`parsing`] (blocks or cards) →
//! [`render`] (display units) → HTML or terminal text. Everything is
//! synchronous and pure; only [`export`] touches the filesystem.

pub mod content;
pub mod export;
pub mod parsing;
pub mod presentation;
pub mod render;

// Re-export key types for easier usage
pub use content::{ContentType, ContentTypeError, RawContent, RenderMode, RenderModeError};
pub use export::{ExportError, export_filename, write_export};
pub use parsing::{
    blocks::{Block, BlockKind},
    segment,
};
pub use presentation::ExpansionState;
pub use render::{DisplayUnit, UnitBody, UnitKind, render};
