use html_escape::{encode_double_quoted_attribute, encode_text};

use super::unit::{ANSWER_ICON, ANSWER_TONE, DisplayUnit, Icon, UnitBody, UnitKind, heading_scale};

/// Serializes units to an HTML fragment, one `<section>` per unit.
pub fn to_html(units: &[DisplayUnit]) -> String {
    let mut out = String::from("<div class=\"lessonmark\">\n");
    for unit in units {
        push_unit(&mut out, unit);
    }
    out.push_str("</div>\n");
    out
}

fn push_icon(out: &mut String, icon: Icon) {
    out.push_str(&format!(
        "  <span class=\"icon icon-{}\" aria-hidden=\"true\"></span>\n",
        icon.as_str()
    ));
}

fn push_unit(out: &mut String, unit: &DisplayUnit) {
    out.push_str(&format!(
        "<section class=\"unit unit-{} tone-{}\"",
        unit.kind.name(),
        unit.tone().as_str()
    ));
    if let Some(group) = &unit.group {
        out.push_str(&format!(
            " data-group=\"{}\"",
            encode_double_quoted_attribute(group)
        ));
    }
    out.push_str(">\n");

    if let Some(icon) = unit.icon() {
        push_icon(out, icon);
    }

    if let Some(title) = &unit.title {
        match unit.kind {
            UnitKind::Header { level } => out.push_str(&format!(
                "  <h2 class=\"heading text-{}\">{title}</h2>\n",
                heading_scale(level)
            )),
            _ => out.push_str(&format!("  <div class=\"unit-title\">{title}</div>\n")),
        }
    }

    push_body(out, &unit.kind, &unit.body);

    if let Some(footer) = &unit.footer {
        out.push_str(&format!("  <div class=\"answer tone-{}\">\n", ANSWER_TONE.as_str()));
        push_icon(out, ANSWER_ICON);
        out.push_str(&format!("  {footer}\n  </div>\n"));
    }

    out.push_str("</section>\n");
}

fn push_body(out: &mut String, kind: &UnitKind, body: &UnitBody) {
    match (kind, body) {
        (_, UnitBody::Empty) => {}
        (UnitKind::Code { lang }, UnitBody::Plain(code)) => {
            let class = lang
                .as_deref()
                .map(|l| format!(" class=\"language-{}\"", encode_double_quoted_attribute(l)))
                .unwrap_or_default();
            out.push_str(&format!(
                "  <pre><code{class}>{}</code></pre>\n",
                encode_text(code)
            ));
        }
        (UnitKind::Quote, UnitBody::Plain(text)) => {
            out.push_str(&format!("  <blockquote>{}</blockquote>\n", encode_text(text)));
        }
        (_, UnitBody::Plain(text)) => {
            out.push_str(&format!("  <div class=\"prose pre-wrap\">{}</div>\n", encode_text(text)));
        }
        (_, UnitBody::Inline(html)) => {
            out.push_str(&format!("  <div class=\"prose\">{html}</div>\n"));
        }
        (_, UnitBody::Items(items)) => {
            out.push_str("  <ul>\n");
            for item in items {
                out.push_str(&format!("    <li>{item}</li>\n"));
            }
            out.push_str("  </ul>\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_scale_class() {
        let unit = DisplayUnit::new(UnitKind::Header { level: 1 }, UnitBody::Empty).with_title("Intro");
        let html = to_html(&[unit]);
        assert!(html.contains("<section class=\"unit unit-header tone-primary\">"));
        assert!(html.contains("<h2 class=\"heading text-2xl\">Intro</h2>"));
        assert!(!html.contains("icon-"));
    }

    #[test]
    fn code_is_escaped_and_tagged_with_language() {
        let unit = DisplayUnit::new(
            UnitKind::Code {
                lang: Some("html".into()),
            },
            UnitBody::Plain("<p>hi</p>".into()),
        );
        let html = to_html(&[unit]);
        assert!(html.contains("<pre><code class=\"language-html\">&lt;p&gt;hi&lt;/p&gt;</code></pre>"));
        assert!(html.contains("icon-book"));
    }

    #[test]
    fn question_footer_gets_answer_icon() {
        let unit = DisplayUnit::new(UnitKind::Question, UnitBody::Items(vec!["a".into()]))
            .with_title("1. Q?")
            .with_footer("Correct Answer: A) a");
        let html = to_html(&[unit]);
        assert!(html.contains("icon-help-circle"));
        assert!(html.contains("<div class=\"answer tone-green\">"));
        assert!(html.contains("icon-check-circle"));
        assert!(html.contains("<li>a</li>"));
    }

    #[test]
    fn list_group_is_an_attribute() {
        let unit = DisplayUnit::new(UnitKind::List, UnitBody::Items(vec![]))
            .with_group(Some("Tools \"and\" kit".into()));
        let html = to_html(&[unit]);
        assert!(html.contains("data-group=\"Tools &quot;and&quot; kit\""));
    }

    #[test]
    fn empty_sequence_is_an_empty_wrapper() {
        assert_eq!(to_html(&[]), "<div class=\"lessonmark\">\n</div>\n");
    }
}
