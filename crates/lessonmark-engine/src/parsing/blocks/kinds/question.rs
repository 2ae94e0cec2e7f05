/// Numbered question: `<digits>.` followed by whitespace.
pub struct NumberedQuestion;

impl NumberedQuestion {
    /// Text that marks an answer line following a question's options.
    pub const ANSWER_MARKER: &'static str = "**Correct Answer:";

    /// Strips the `12. ` numbering from a trimmed line.
    pub fn strip(line: &str) -> Option<&str> {
        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let rest = line[digits..].strip_prefix('.')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim_start())
    }

    pub fn is_answer_line(raw: &str) -> bool {
        raw.contains(Self::ANSWER_MARKER)
    }
}
