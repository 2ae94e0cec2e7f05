use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::split_at_line_starts;

/// A `{header, content}` card. `header` is empty when the chunk had no bold
/// span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSection {
    pub header: String,
    pub content: String,
}

fn section_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\*[^*]+\*\*").expect("Invalid section start regex"))
}

fn bold_span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold span regex"))
}

/// Cuts the text at every line that begins with a `**bold**` span.
///
/// Each chunk's header is its first bold span (which may sit mid-line in the
/// leading chunk); the content is the chunk with that span removed, trimmed.
/// Chunks with neither header nor content are dropped.
pub fn parse_sections(text: &str) -> Vec<ParsedSection> {
    split_at_line_starts(text, section_start_regex())
        .into_iter()
        .map(section_of)
        .filter(|s| !(s.header.is_empty() && s.content.is_empty()))
        .collect()
}

fn section_of(chunk: &str) -> ParsedSection {
    let re = bold_span_regex();
    match re.captures(chunk) {
        Some(caps) => ParsedSection {
            header: caps[1].to_string(),
            content: re.replace(chunk, "").trim().to_string(),
        },
        None => ParsedSection {
            header: String::new(),
            content: chunk.trim().to_string(),
        },
    }
}
