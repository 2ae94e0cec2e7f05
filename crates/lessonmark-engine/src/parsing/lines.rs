/// A half-open range `[start, end)` of zero-based line indices.
///
/// Every block records the source lines it consumed, so ordering and
/// coverage can be checked without keeping copies of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct LineSpan {
    /// First line of the block.
    pub start: usize,
    /// One past the last line of the block.
    pub end: usize,
}

impl LineSpan {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(self, line: usize) -> bool {
        self.start <= line && line < self.end
    }
}

/// A single source line with its index.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    pub index: usize,
    /// The line as written, without its terminator.
    pub raw: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line with surrounding whitespace (including a stray `\r`) removed.
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Splits text into indexed lines. `\r\n` endings are tolerated because
/// every consumer works on trimmed text or trims the final block.
pub fn lines_of(text: &str) -> Vec<LineRef<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(index, raw)| LineRef {
            index,
            raw: raw.strip_suffix('\r').unwrap_or(raw),
        })
        .collect()
}
