use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::split_at_line_starts;

/// A presentation slide. `number` is its position in the output, starting
/// at 1; the number written in the source is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSlide {
    pub number: usize,
    pub title: String,
    pub content: String,
}

fn slide_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Slide \d+:").expect("Invalid slide start regex"))
}

fn slide_title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Slide \d+:[ \t]*(.*)").expect("Invalid slide title regex"))
}

/// Cuts the text at every `Slide <n>:` line.
///
/// The title is the rest of that line; the content is the chunk without
/// that line, trimmed. Text before the first slide line becomes an untitled
/// slide. Empty chunks are dropped before numbering.
pub fn parse_slides(text: &str) -> Vec<ParsedSlide> {
    split_at_line_starts(text, slide_start_regex())
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .enumerate()
        .map(|(idx, chunk)| {
            let (title, content) = split_title(chunk);
            ParsedSlide {
                number: idx + 1,
                title,
                content,
            }
        })
        .collect()
}

fn split_title(chunk: &str) -> (String, String) {
    let Some(caps) = slide_title_regex().captures(chunk) else {
        return (String::new(), chunk.trim().to_string());
    };
    let (Some(line), Some(title)) = (caps.get(0), caps.get(1)) else {
        return (String::new(), chunk.trim().to_string());
    };

    let after = &chunk[line.end()..];
    let after = after.strip_prefix('\n').unwrap_or(after);
    let content = format!("{}{}", &chunk[..line.start()], after);

    (title.as_str().trim().to_string(), content.trim().to_string())
}
