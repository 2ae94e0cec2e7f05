/// ATX-style heading (`#`, `##`, ...). The level is the count of leading
/// markers; deeper levels are kept as-is and only clamped when rendering.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns `(level, title)` for a trimmed line that starts with `#`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        if !line.starts_with(Self::MARKER) {
            return None;
        }
        let rest = line.trim_start_matches(Self::MARKER);
        let count = line.len() - rest.len();
        let level = u8::try_from(count).unwrap_or(u8::MAX);
        Some((level, rest.trim()))
    }
}

/// A line that is nothing but one `**bold**` span, used by models as a
/// section title.
pub struct BoldHeading;

impl BoldHeading {
    pub const MARKER: &'static str = "**";
    /// Bold-as-header lines are always shown at this level.
    pub const LEVEL: u8 = 2;

    pub fn parse(line: &str) -> Option<&str> {
        let inner = line
            .strip_prefix(Self::MARKER)?
            .strip_suffix(Self::MARKER)?;
        if inner.contains(Self::MARKER) {
            return None;
        }
        let title = inner.trim();
        (!title.is_empty()).then_some(title)
    }
}
