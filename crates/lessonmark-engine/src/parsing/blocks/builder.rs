use crate::parsing::lines::{LineRef, LineSpan, lines_of};

use super::{
    classify::{LineClass, LineClassifier},
    kinds::{BoldHeading, CodeFence, NumberedQuestion},
    types::{Block, BlockKind},
};

/// The most recent header, remembered so the first list after it can be
/// attached to it.
#[derive(Debug, Clone)]
struct LastHeader {
    title: String,
    claimed: bool,
}

/// Forward-only segmenter over a buffered text.
///
/// Each `step` classifies the line under the cursor and consumes it together
/// with whatever lookahead the block kind needs (list continuation, question
/// options, fence interior, paragraph continuation). Emitted blocks are never
/// revisited.
pub struct BlockBuilder<'a> {
    classifier: LineClassifier,
    lines: Vec<LineRef<'a>>,
    pos: usize,
    last_header: Option<LastHeader>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            classifier: LineClassifier,
            lines: lines_of(text),
            pos: 0,
            last_header: None,
            out: vec![],
        }
    }

    /// Runs to end of input and returns the blocks in source order.
    pub fn finish(mut self) -> Vec<Block> {
        while self.pos < self.lines.len() {
            self.step();
        }
        self.out
    }

    fn class_at(&self, idx: usize) -> Option<LineClass<'a>> {
        self.lines.get(idx).map(|l| self.classifier.classify(l))
    }

    fn step(&mut self) {
        let start = self.pos;
        let Some(class) = self.class_at(start) else {
            return;
        };

        match class {
            LineClass::Blank => self.pos += 1,
            LineClass::Heading { level, title } => self.push_header(level, title),
            LineClass::BoldHeading(title) => self.push_header(BoldHeading::LEVEL, title),
            LineClass::ListItem(_) => self.consume_list(),
            LineClass::Question(text) => self.consume_question(text),
            LineClass::FenceOpen { lang } => self.consume_fence(lang),
            LineClass::Quote(text) => {
                self.pos += 1;
                self.emit(BlockKind::Quote, text.to_string(), start);
            }
            LineClass::Callout { kind, text } => {
                self.pos += 1;
                self.emit(kind.into(), text.to_string(), start);
            }
            LineClass::Text(_) => self.consume_paragraph(),
        }
    }

    fn emit(&mut self, kind: BlockKind, content: String, start: usize) {
        self.out.push(Block {
            kind,
            content,
            lines: LineSpan {
                start,
                end: self.pos,
            },
        });
    }

    fn push_header(&mut self, level: u8, title: &str) {
        let start = self.pos;
        self.pos += 1;
        self.last_header = Some(LastHeader {
            title: title.to_string(),
            claimed: false,
        });
        self.emit(BlockKind::Header { level }, title.to_string(), start);
    }

    /// Consumes bullet lines starting at the cursor.
    fn take_list_items(&mut self) -> Vec<String> {
        let mut items = vec![];
        while let Some(LineClass::ListItem(item)) = self.class_at(self.pos) {
            items.push(item.to_string());
            self.pos += 1;
        }
        items
    }

    fn consume_list(&mut self) {
        let start = self.pos;
        let items = self.take_list_items();

        let header_for_list = match self.last_header.as_mut() {
            Some(h) if !h.claimed => {
                h.claimed = true;
                Some(h.title.clone())
            }
            _ => None,
        };

        self.emit(
            BlockKind::List {
                items,
                header_for_list,
            },
            String::new(),
            start,
        );
    }

    fn consume_question(&mut self, text: &str) {
        let start = self.pos;
        self.pos += 1;
        let mut content = text.to_string();

        let options = self.take_list_items();
        let items = (!options.is_empty()).then_some(options);

        let mut is_correct = false;
        if let Some(next) = self.lines.get(self.pos)
            && NumberedQuestion::is_answer_line(next.raw)
        {
            is_correct = true;
            content.push('\n');
            content.push_str(next.trimmed());
            self.pos += 1;
        }

        self.emit(BlockKind::Question { items, is_correct }, content, start);
    }

    /// Fence interior is taken verbatim; an unterminated fence runs to EOF.
    fn consume_fence(&mut self, lang: Option<&str>) {
        let start = self.pos;
        self.pos += 1;
        let mut body: Vec<&str> = vec![];

        while let Some(line) = self.lines.get(self.pos) {
            self.pos += 1;
            if CodeFence::closes(line.raw) {
                break;
            }
            body.push(line.raw);
        }

        let content = body.join("\n").trim().to_string();
        self.emit(
            BlockKind::Code {
                lang: lang.map(str::to_string),
            },
            content,
            start,
        );
    }

    /// Joins this line and following plain lines until a blank line or a
    /// line that opens another block.
    fn consume_paragraph(&mut self) {
        let start = self.pos;
        let mut parts: Vec<&str> = vec![];

        while let Some(class) = self.class_at(self.pos) {
            match class {
                LineClass::Text(t) => {
                    parts.push(t);
                    self.pos += 1;
                }
                _ => break,
            }
        }

        self.emit(BlockKind::Text, parts.join("\n"), start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<BlockKind> {
        BlockBuilder::new(text)
            .finish()
            .into_iter()
            .map(|b| b.kind)
            .collect()
    }

    #[test]
    fn header_then_list_is_associated() {
        let blocks = BlockBuilder::new("**Materials**\n- Paper\n- Glue").finish();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Header { level: 2 });
        assert_eq!(blocks[0].content, "Materials");
        assert_eq!(
            blocks[1].kind,
            BlockKind::List {
                items: vec!["Paper".into(), "Glue".into()],
                header_for_list: Some("Materials".into()),
            }
        );
    }

    #[test]
    fn second_list_under_same_header_is_unattached() {
        let blocks = BlockBuilder::new("## Steps\n- one\n\nThen:\n- two").finish();
        assert_eq!(blocks[1].header_for_list(), Some("Steps"));
        assert_eq!(blocks[3].header_for_list(), None);
    }

    #[test]
    fn list_without_header_is_unattached() {
        let blocks = BlockBuilder::new("- a\n- b").finish();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].header_for_list(), None);
        assert_eq!(blocks[0].items(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn new_header_can_be_claimed_again() {
        let blocks = BlockBuilder::new("# A\n- x\n# B\n- y").finish();
        assert_eq!(blocks[1].header_for_list(), Some("A"));
        assert_eq!(blocks[3].header_for_list(), Some("B"));
    }

    #[test]
    fn question_collects_options_and_answer() {
        let text = "1. Capital of France?\n- A) Paris\n- B) Lyon\n**Correct Answer: A) Paris**";
        let blocks = BlockBuilder::new(text).finish();
        assert_eq!(blocks.len(), 1);
        let q = &blocks[0];
        assert!(q.is_correct());
        assert_eq!(q.question_text(), "Capital of France?");
        assert_eq!(q.answer_line(), Some("**Correct Answer: A) Paris**"));
        assert_eq!(
            q.items(),
            Some(&["A) Paris".to_string(), "B) Lyon".to_string()][..])
        );
        assert_eq!(q.lines, LineSpan { start: 0, end: 4 });
    }

    #[test]
    fn answer_after_blank_line_is_not_attached() {
        let text = "1. What is 2+2?\n- A) 3\n- B) 4\n\n**Correct Answer: B) 4**";
        let blocks = BlockBuilder::new(text).finish();
        assert_eq!(blocks.len(), 2);
        assert!(!blocks[0].is_correct());
        assert_eq!(blocks[1].kind, BlockKind::Header { level: 2 });
        assert_eq!(blocks[1].content, "Correct Answer: B) 4");
    }

    #[test]
    fn question_without_options_has_no_items() {
        let blocks = BlockBuilder::new("2. Explain photosynthesis.").finish();
        assert_eq!(
            blocks[0].kind,
            BlockKind::Question {
                items: None,
                is_correct: false
            }
        );
    }

    #[test]
    fn fenced_code_splits_paragraphs() {
        let blocks = BlockBuilder::new("Before\n```\nlet x = 1;\n```\nAfter").finish();
        let got: Vec<(BlockKind, &str)> = blocks
            .iter()
            .map(|b| (b.kind.clone(), b.content.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (BlockKind::Text, "Before"),
                (BlockKind::Code { lang: None }, "let x = 1;"),
                (BlockKind::Text, "After"),
            ]
        );
    }

    #[test]
    fn fence_interior_is_not_classified() {
        let blocks = BlockBuilder::new("```md\n# not a header\n- not a list\n```").finish();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Code {
                lang: Some("md".into())
            }
        );
        assert_eq!(blocks[0].content, "# not a header\n- not a list");
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let blocks = BlockBuilder::new("Intro\n```\nfn main() {}\n\nmore").finish();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].content, "fn main() {}\n\nmore");
        assert_eq!(blocks[1].lines, LineSpan { start: 1, end: 5 });
    }

    #[test]
    fn paragraph_lines_are_joined_until_a_block_opens() {
        let blocks = BlockBuilder::new("First line\n  second line\n> quote").finish();
        assert_eq!(blocks[0].content, "First line\nsecond line");
        assert_eq!(blocks[1].kind, BlockKind::Quote);
        assert_eq!(blocks[1].content, "quote");
    }

    #[test]
    fn paragraph_absorbs_lines_that_only_look_structured() {
        let blocks = BlockBuilder::new("Score: 8/10\n**Grammar:** good\n-5 for lateness").finish();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].content,
            "Score: 8/10\n**Grammar:** good\n-5 for lateness"
        );
    }

    #[test]
    fn callouts_are_single_line() {
        assert_eq!(
            kinds("Note: a\nWarning: b\nInfo: c"),
            vec![BlockKind::Note, BlockKind::Warning, BlockKind::Info]
        );
    }

    #[test]
    fn blank_lines_never_start_blocks() {
        assert!(kinds("\n\n   \n").is_empty());
        assert!(kinds("").is_empty());
    }

    #[test]
    fn unstructured_text_is_one_block() {
        assert_eq!(kinds("just some words\nand more words"), vec![BlockKind::Text]);
    }
}
