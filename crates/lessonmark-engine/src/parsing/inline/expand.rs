use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{Bold, CodeSpan, Italic};

fn delimited(delim: &str, inner: &str) -> String {
    let d = regex::escape(delim);
    format!("{d}({inner}){d}")
}

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&delimited(Bold::DELIM, ".*?")).expect("Invalid bold regex"))
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&delimited(Italic::DELIM, ".*?")).expect("Invalid italic regex")
    })
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let tick = CodeSpan::TICK.to_string();
        Regex::new(&delimited(&tick, "[^`]+")).expect("Invalid code span regex")
    })
}

/// Escapes `&`, `<` and `>` so text can be embedded in markup.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Expands bold, italic and inline code, in that order, into HTML tags.
///
/// ```
/// use lessonmark_engine::parsing::inline::expand_inline;
///
/// assert_eq!(
///     expand_inline("**bold** and *italic*"),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// ```
pub fn expand_inline(text: &str) -> String {
    let escaped = escape(text);
    let html = bold_regex().replace_all(&escaped, format!("<{0}>$1</{0}>", Bold::TAG).as_str());
    let html = italic_regex().replace_all(&html, format!("<{0}>$1</{0}>", Italic::TAG).as_str());
    let html = code_regex().replace_all(&html, format!("<{0}>$1</{0}>", CodeSpan::TAG).as_str());
    html.into_owned()
}
