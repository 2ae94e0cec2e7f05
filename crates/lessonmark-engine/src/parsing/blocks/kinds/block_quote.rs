/// Single-line blockquote. Each `>` line is its own block.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips the `>` and at most one following space.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
