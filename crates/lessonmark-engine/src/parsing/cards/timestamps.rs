use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::parsing::inline::escape;

/// Plain text or a `(start - end)` time range, for video-script cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextSegment {
    Text { text: String },
    Timestamp { start: String, end: String },
}

/// CSS class applied to highlighted ranges.
pub const TIMESTAMP_CLASS: &str = "timestamp";

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\((\d+:\d+)\s*-\s*(\d+:\d+)\)").expect("Invalid timestamp regex")
    })
}

/// Splits text into plain runs and timestamp ranges, in order.
pub fn split_timestamps(text: &str) -> Vec<TextSegment> {
    let mut segments = vec![];
    let mut last = 0;

    for caps in timestamp_regex().captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        if m.start() > last {
            segments.push(TextSegment::Text {
                text: text[last..m.start()].to_string(),
            });
        }
        segments.push(TextSegment::Timestamp {
            start: caps[1].to_string(),
            end: caps[2].to_string(),
        });
        last = m.end();
    }

    if last < text.len() {
        segments.push(TextSegment::Text {
            text: text[last..].to_string(),
        });
    }
    segments
}

/// Escapes the text and wraps each time range in a highlight span.
/// Ranges are normalized to `(start - end)`.
pub fn highlight_timestamps(text: &str) -> String {
    split_timestamps(text)
        .into_iter()
        .map(|seg| match seg {
            TextSegment::Text { text } => escape(&text).into_owned(),
            TextSegment::Timestamp { start, end } => {
                format!(r#"<span class="{TIMESTAMP_CLASS}">({start} - {end})</span>"#)
            }
        })
        .collect()
}
