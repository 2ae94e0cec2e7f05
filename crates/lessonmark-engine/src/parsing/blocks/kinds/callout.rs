use serde::Serialize;

/// Which fixed prefix introduced a callout line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Note,
    Warning,
    Info,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 3] = [Self::Note, Self::Warning, Self::Info];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Note => "Note:",
            Self::Warning => "Warning:",
            Self::Info => "Info:",
        }
    }
}

/// `Note:` / `Warning:` / `Info:` annotation lines.
pub struct Callout;

impl Callout {
    /// Returns the kind and the text after the first colon, trimmed.
    pub fn parse(line: &str) -> Option<(CalloutKind, &str)> {
        CalloutKind::ALL
            .into_iter()
            .find_map(|kind| line.strip_prefix(kind.prefix()).map(|rest| (kind, rest.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_prefix() {
        assert_eq!(
            Callout::parse("Note: bring pencils"),
            Some((CalloutKind::Note, "bring pencils"))
        );
        assert_eq!(
            Callout::parse("Warning:  hot plate"),
            Some((CalloutKind::Warning, "hot plate"))
        );
        assert_eq!(
            Callout::parse("Info: 30 minutes"),
            Some((CalloutKind::Info, "30 minutes"))
        );
    }

    #[test]
    fn keeps_text_after_later_colons() {
        assert_eq!(
            Callout::parse("Note: ratio is 3:1"),
            Some((CalloutKind::Note, "ratio is 3:1"))
        );
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert_eq!(Callout::parse("note: lowercase"), None);
        assert_eq!(Callout::parse("Notes: plural"), None);
    }
}
