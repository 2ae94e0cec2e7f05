use std::sync::OnceLock;

use regex::Regex;

use super::unit::{DisplayUnit, UnitBody, UnitKind};

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"))
}

/// Reduces escaped markup back to readable text.
pub fn strip_markup(html: &str) -> String {
    let text = tag_regex().replace_all(html, "");
    html_escape::decode_html_entities(&text).into_owned()
}

/// Serializes units for a terminal, separated by blank lines.
pub fn to_plain_text(units: &[DisplayUnit]) -> String {
    units
        .iter()
        .map(unit_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("    {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn unit_text(unit: &DisplayUnit) -> String {
    let mut lines: Vec<String> = vec![];

    if let Some(title) = &unit.title {
        let title = strip_markup(title);
        match unit.kind {
            UnitKind::Header { level } => {
                lines.push(format!("{} {title}", "#".repeat(usize::from(level.max(1)))));
            }
            _ => lines.push(title),
        }
    }

    match (&unit.kind, &unit.body) {
        (_, UnitBody::Empty) => {}
        (UnitKind::Code { .. }, UnitBody::Plain(code)) => lines.push(indent(code)),
        (UnitKind::Quote, UnitBody::Plain(text)) => {
            lines.extend(text.lines().map(|l| format!("> {l}")));
        }
        (UnitKind::Note, UnitBody::Inline(html)) => lines.push(format!("Note: {}", strip_markup(html))),
        (UnitKind::Warning, UnitBody::Inline(html)) => {
            lines.push(format!("Warning: {}", strip_markup(html)));
        }
        (UnitKind::Info, UnitBody::Inline(html)) => lines.push(format!("Info: {}", strip_markup(html))),
        (_, UnitBody::Plain(text)) => lines.push(text.clone()),
        (_, UnitBody::Inline(html)) => lines.push(strip_markup(html)),
        (_, UnitBody::Items(items)) => {
            lines.extend(items.iter().map(|i| format!("  - {}", strip_markup(i))));
        }
    }

    if let Some(footer) = &unit.footer {
        lines.push(format!("  => {}", strip_markup(footer)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_tags_and_decodes_entities() {
        assert_eq!(
            strip_markup("<strong>a &amp; b</strong> &lt;c&gt;"),
            "a & b <c>"
        );
    }

    #[test]
    fn question_with_options_and_answer() {
        let unit = DisplayUnit::new(
            UnitKind::Question,
            UnitBody::Items(vec![
                "<strong>A)</strong> 3".into(),
                "<strong>B)</strong> 4".into(),
            ]),
        )
        .with_title("1. What is 2+2?")
        .with_footer("Correct Answer: B) 4");
        assert_eq!(
            to_plain_text(&[unit]),
            "1. What is 2+2?\n  - A) 3\n  - B) 4\n  => Correct Answer: B) 4"
        );
    }

    #[test]
    fn headers_callouts_and_quotes() {
        let units = vec![
            DisplayUnit::new(UnitKind::Header { level: 2 }, UnitBody::Empty).with_title("Plan"),
            DisplayUnit::new(UnitKind::Warning, UnitBody::Inline("<em>hot</em>".into())),
            DisplayUnit::new(UnitKind::Quote, UnitBody::Plain("said".into())),
        ];
        assert_eq!(to_plain_text(&units), "## Plan\n\nWarning: hot\n\n> said");
    }

    #[test]
    fn code_is_indented() {
        let unit = DisplayUnit::new(UnitKind::Code { lang: None }, UnitBody::Plain("a\nb".into()));
        assert_eq!(to_plain_text(&[unit]), "    a\n    b");
    }
}
