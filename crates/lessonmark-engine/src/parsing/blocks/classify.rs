use crate::parsing::lines::LineRef;

use super::kinds::{
    BlockQuote, BoldHeading, Callout, CalloutKind, CodeFence, Heading, ListItem, NumberedQuestion,
};

/// Classification of a single line from local facts only.
///
/// This is phase 1 of segmenting: each line is classified independently.
/// Rules are tried in precedence order and the first match wins, so e.g. a
/// `**bold**` line is a heading even though it also starts with `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: u8, title: &'a str },
    BoldHeading(&'a str),
    ListItem(&'a str),
    Question(&'a str),
    FenceOpen { lang: Option<&'a str> },
    Quote(&'a str),
    Callout { kind: CalloutKind, text: &'a str },
    /// Fallback: a non-blank line that opens nothing.
    Text(&'a str),
}

impl LineClass<'_> {
    /// Whether this line opens a structured block (anything but text/blank).
    /// Paragraphs stop growing at such lines.
    pub fn opens_block(&self) -> bool {
        !matches!(self, Self::Blank | Self::Text(_))
    }
}

/// Classifies individual lines for the block phase.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify<'a>(&self, line: &LineRef<'a>) -> LineClass<'a> {
        let t = line.trimmed();
        if t.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, title)) = Heading::parse(t) {
            return LineClass::Heading { level, title };
        }
        if let Some(title) = BoldHeading::parse(t) {
            return LineClass::BoldHeading(title);
        }
        if let Some(item) = ListItem::strip(t) {
            return LineClass::ListItem(item);
        }
        if let Some(question) = NumberedQuestion::strip(t) {
            return LineClass::Question(question);
        }
        if let Some(lang) = CodeFence::open(t) {
            return LineClass::FenceOpen { lang };
        }
        if let Some(quote) = BlockQuote::strip(t) {
            return LineClass::Quote(quote);
        }
        if let Some((kind, text)) = Callout::parse(t) {
            return LineClass::Callout { kind, text };
        }
        LineClass::Text(t)
    }
}
