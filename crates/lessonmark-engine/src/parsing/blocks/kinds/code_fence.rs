/// Triple-backtick fenced code block. The inside is a raw zone: nothing is
/// classified or inline-expanded there.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the trimmed line opens a fence, returns its info string
    /// (`Some("rust")` for ```` ```rust ````, `None` for a bare fence).
    pub fn open(line: &str) -> Option<Option<&str>> {
        let info = line.strip_prefix(Self::BACKTICKS)?.trim_matches('`').trim();
        Some((!info.is_empty()).then_some(info))
    }

    pub fn closes(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }
}
