//! # Block Segmenting
//!
//! Two-phase, line-oriented segmenting of model output.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` from local facts only, in fixed precedence order
//!    (header, bold header, list item, numbered question, fence, quote,
//!    callout, text).
//!
//! 2. **Block Construction** (`builder`): `BlockBuilder` walks forward with
//!    lookahead inside a block and one piece of carried state: the last
//!    header, which the first following list may claim.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`
//! - **`kinds`**: block-specific types that own their markers
//! - **`classify`**: `LineClassifier` producing `LineClass`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks come out in source order and their line spans never overlap
//! - Every non-blank line belongs to exactly one block
//! - Fenced code is a raw zone: no classification or inline expansion inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use kinds::CalloutKind;
pub use types::{Block, BlockKind};
