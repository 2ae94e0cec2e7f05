use serde::Serialize;

use super::kinds::CalloutKind;
use crate::parsing::lines::LineSpan;

/// The kind of a segmented block, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// `#` heading or a line that is a single `**bold**` span.
    Header { level: u8 },
    /// Consecutive plain lines.
    Text,
    /// Consecutive bullet lines.
    List {
        items: Vec<String>,
        /// Title of the preceding header when this list is the first to
        /// follow it.
        header_for_list: Option<String>,
    },
    /// `1. question` with optional option lines and answer marker.
    Question {
        items: Option<Vec<String>>,
        is_correct: bool,
    },
    /// Fenced code; `lang` is the fence's info string.
    Code { lang: Option<String> },
    Quote,
    Note,
    Warning,
    Info,
}

impl From<CalloutKind> for BlockKind {
    fn from(kind: CalloutKind) -> Self {
        match kind {
            CalloutKind::Note => Self::Note,
            CalloutKind::Warning => Self::Warning,
            CalloutKind::Info => Self::Info,
        }
    }
}

/// One classified, contiguous span of source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Primary text with markers stripped. For a question whose answer line
    /// was recognized, the trimmed answer line follows on a new line.
    pub content: String,
    /// Source lines this block consumed.
    pub lines: LineSpan,
}

impl Block {
    pub fn level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Header { level } => Some(level),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[String]> {
        match &self.kind {
            BlockKind::List { items, .. } => Some(items),
            BlockKind::Question { items, .. } => items.as_deref(),
            _ => None,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self.kind, BlockKind::Question { is_correct: true, .. })
    }

    pub fn header_for_list(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::List {
                header_for_list, ..
            } => header_for_list.as_deref(),
            _ => None,
        }
    }

    /// First line of the content: the question text without the answer line.
    pub fn question_text(&self) -> &str {
        self.content.split('\n').next().unwrap_or_default()
    }

    /// The appended `**Correct Answer: ...**` line, if one was recognized.
    pub fn answer_line(&self) -> Option<&str> {
        if !self.is_correct() {
            return None;
        }
        self.content.rsplit('\n').next()
    }
}
