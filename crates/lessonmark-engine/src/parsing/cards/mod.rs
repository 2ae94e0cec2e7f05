//! # Card Parsers
//!
//! Content-type-specific decompositions that work on the raw string
//! directly, separate from the block segmenter. Each one cuts the text into
//! chunks at line starts matching a marker pattern and pulls a few fields
//! out of every chunk with regular expressions.
//!
//! - **`sections`**: `**Header**` chunks (worksheet, lesson plan, essay
//!   feedback, summary, video script, prose rewrites)
//! - **`timestamps`**: `(mm:ss - mm:ss)` highlighting for video scripts
//! - **`slides`**: `Slide N:` chunks, renumbered by position
//! - **`mcq`**: numbered questions with lettered options and answer key
//!
//! All parsers are total: missing markers give empty fields, never errors.

pub mod mcq;
pub mod sections;
pub mod slides;
pub mod timestamps;

pub use mcq::{McqOption, ParsedQuestion, looks_like_mcq, parse_mcqs};
pub use sections::{ParsedSection, parse_sections};
pub use slides::{ParsedSlide, parse_slides};
pub use timestamps::{TextSegment, highlight_timestamps, split_timestamps};

use regex::Regex;

/// Splits `text` before every newline that is followed by a line matching
/// `line_start`. The newline itself is dropped; chunk order is preserved.
///
/// `line_start` must be anchored with `^` and is tested against the slice
/// that begins right after each newline.
pub(crate) fn split_at_line_starts<'t>(text: &'t str, line_start: &Regex) -> Vec<&'t str> {
    let mut chunks = vec![];
    let mut chunk_start = 0;

    for (nl, _) in text.match_indices('\n') {
        let next = nl + 1;
        if line_start.is_match(&text[next..]) {
            chunks.push(&text[chunk_start..nl]);
            chunk_start = next;
        }
    }
    chunks.push(&text[chunk_start..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_only_at_matching_line_starts() {
        let re = Regex::new(r"^\d+\.\s").unwrap();
        let chunks = split_at_line_starts("intro\n1. a\nnot 2. b\n2. c", &re);
        assert_eq!(chunks, vec!["intro", "1. a\nnot 2. b", "2. c"]);
    }

    #[test]
    fn first_line_match_does_not_create_empty_chunk() {
        let re = Regex::new(r"^\d+\.\s").unwrap();
        let chunks = split_at_line_starts("1. a\n2. b", &re);
        assert_eq!(chunks, vec!["1. a", "2. b"]);
    }

    #[test]
    fn empty_text_is_one_empty_chunk() {
        let re = Regex::new(r"^x").unwrap();
        assert_eq!(split_at_line_starts("", &re), vec![""]);
    }
}
