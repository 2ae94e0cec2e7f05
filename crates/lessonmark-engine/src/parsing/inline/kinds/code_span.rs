/// Inline code span. Expanded after emphasis, so asterisks inside backticks
/// are already consumed by then.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
    pub const TAG: &'static str = "code";
}
