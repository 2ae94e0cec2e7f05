/// Bullet list item: `-` or `*` followed by whitespace.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Strips the bullet from a trimmed line, returning the item text.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKERS)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim_start())
    }
}
