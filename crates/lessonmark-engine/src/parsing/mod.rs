//! # Parsing
//!
//! Two independent views of the same raw string:
//!
//! - [`segment`] turns text into a flat list of typed [`Block`]s for the
//!   generic block renderer (phase 1 classifies lines, phase 2 groups them).
//! - [`cards`] cuts text into content-type-specific records (sections,
//!   slides, questions) for card rendering.
//!
//! [`inline`] expands emphasis inside block and card text.

pub mod blocks;
pub mod cards;
pub mod inline;
pub mod invariants;
pub mod lines;

use blocks::{Block, BlockBuilder};

/// Segments text into blocks in source order. Never fails: unrecognized
/// lines become text blocks and blank-only input gives no blocks.
pub fn segment(text: &str) -> Vec<Block> {
    let blocks = BlockBuilder::new(text).finish();
    log::debug!("segmented {} bytes into {} blocks", text.len(), blocks.len());
    blocks
}
