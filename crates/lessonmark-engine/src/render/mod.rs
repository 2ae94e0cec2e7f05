//! # Render Mapping
//!
//! Pure functions from parsed records to [`DisplayUnit`]s. Two views exist:
//!
//! - **Blocks**: the generic formatted view, one unit per segmented block.
//! - **Cards**: a content-type-specific view built from the card parsers.
//!
//! Every string placed in a unit's title, footer, `Inline` body or `Items`
//! is escaped before inline expansion, so serialized output never carries
//! tags from the source text.

pub mod html;
pub mod plain;
pub mod unit;

pub use unit::{
    ANSWER_ICON, ANSWER_TONE, DisplayUnit, Icon, Tone, UnitBody, UnitKind, heading_scale,
};

use crate::content::{ContentType, RawContent, RenderMode};
use crate::parsing::blocks::{Block, BlockKind};
use crate::parsing::cards::{
    ParsedQuestion, ParsedSection, ParsedSlide, highlight_timestamps, looks_like_mcq, parse_mcqs,
    parse_sections, parse_slides,
};
use crate::parsing::inline::{escape, expand_inline};
use crate::parsing::segment;

/// Parses and renders in one pass. Blank input renders to nothing.
pub fn render(raw: &RawContent, content_type: ContentType, mode: RenderMode) -> Vec<DisplayUnit> {
    if raw.is_blank() {
        return vec![];
    }
    log::debug!("rendering {content_type} in {mode} mode");
    match mode {
        RenderMode::Blocks => render_blocks(&segment(raw.as_str())),
        RenderMode::Cards => render_cards(raw.as_str(), content_type),
    }
}

pub fn render_blocks(blocks: &[Block]) -> Vec<DisplayUnit> {
    blocks.iter().map(render_block).collect()
}

fn expand_all(items: &[String]) -> Vec<String> {
    items.iter().map(|i| expand_inline(i)).collect()
}

pub fn render_block(block: &Block) -> DisplayUnit {
    match &block.kind {
        BlockKind::Header { level } => {
            DisplayUnit::new(UnitKind::Header { level: *level }, UnitBody::Empty)
                .with_title(escape(&block.content))
        }
        BlockKind::Text => {
            DisplayUnit::new(UnitKind::Text, UnitBody::Inline(expand_inline(&block.content)))
        }
        BlockKind::List {
            items,
            header_for_list,
        } => DisplayUnit::new(UnitKind::List, UnitBody::Items(expand_all(items)))
            .with_group(header_for_list.clone()),
        BlockKind::Question { items, .. } => {
            let body = match items {
                Some(items) => UnitBody::Items(expand_all(items)),
                None => UnitBody::Empty,
            };
            let unit = DisplayUnit::new(UnitKind::Question, body)
                .with_title(expand_inline(block.question_text()));
            match block.answer_line() {
                Some(answer) => unit.with_footer(expand_inline(answer)),
                None => unit,
            }
        }
        BlockKind::Code { lang } => DisplayUnit::new(
            UnitKind::Code { lang: lang.clone() },
            UnitBody::Plain(block.content.clone()),
        ),
        BlockKind::Quote => DisplayUnit::new(UnitKind::Quote, UnitBody::Plain(block.content.clone())),
        BlockKind::Note => callout(UnitKind::Note, &block.content),
        BlockKind::Warning => callout(UnitKind::Warning, &block.content),
        BlockKind::Info => callout(UnitKind::Info, &block.content),
    }
}

fn callout(kind: UnitKind, text: &str) -> DisplayUnit {
    DisplayUnit::new(kind, UnitBody::Inline(expand_inline(text)))
}

/// Content-type dispatch for the card view.
pub fn render_cards(text: &str, content_type: ContentType) -> Vec<DisplayUnit> {
    match content_type {
        ContentType::Mcq => render_questions(&parse_mcqs(text)),
        ContentType::Ppt => render_slides(&parse_slides(text)),
        ContentType::Worksheet
        | ContentType::LessonPlan
        | ContentType::EssayGrade
        | ContentType::Summarize => render_sections(&parse_sections(text)),
        ContentType::Youtube => render_timestamped_sections(&parse_sections(text)),
        ContentType::Rewrite => render_rewrite(text),
    }
}

fn render_rewrite(text: &str) -> Vec<DisplayUnit> {
    if looks_like_mcq(text) {
        log::debug!("rewrite output has question shape, using MCQ cards");
        return render_questions(&parse_mcqs(text));
    }
    if text.contains("**") {
        log::debug!("rewrite output has bold headers, using section cards");
        return render_sections(&parse_sections(text));
    }
    log::debug!("rewrite output is unstructured, using one card");
    vec![DisplayUnit::new(
        UnitKind::Section,
        UnitBody::Plain(text.trim().to_string()),
    )]
}

/// MCQ cards are numbered by position, not by the number in the source.
pub fn render_questions(questions: &[ParsedQuestion]) -> Vec<DisplayUnit> {
    questions
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let options = q
                .options
                .iter()
                .map(|o| format!("<strong>{})</strong> {}", o.label, escape(&o.text)))
                .collect();
            let unit = DisplayUnit::new(UnitKind::Question, UnitBody::Items(options))
                .with_title(escape(&format!("{}. {}", idx + 1, q.question)));
            match &q.correct {
                Some(c) => unit.with_footer(escape(&format!("Correct Answer: {}) {}", c.label, c.text))),
                None => unit,
            }
        })
        .collect()
}

fn section_body(content: &str) -> UnitBody {
    if content.is_empty() {
        UnitBody::Empty
    } else {
        UnitBody::Plain(content.to_string())
    }
}

fn section_unit(section: &ParsedSection, body: UnitBody) -> DisplayUnit {
    let unit = DisplayUnit::new(UnitKind::Section, body);
    if section.header.is_empty() {
        unit
    } else {
        unit.with_title(escape(&section.header))
    }
}

pub fn render_sections(sections: &[ParsedSection]) -> Vec<DisplayUnit> {
    sections
        .iter()
        .map(|s| section_unit(s, section_body(&s.content)))
        .collect()
}

pub fn render_timestamped_sections(sections: &[ParsedSection]) -> Vec<DisplayUnit> {
    sections
        .iter()
        .map(|s| {
            let body = if s.content.is_empty() {
                UnitBody::Empty
            } else {
                UnitBody::Inline(highlight_timestamps(&s.content))
            };
            section_unit(s, body)
        })
        .collect()
}

pub fn render_slides(slides: &[ParsedSlide]) -> Vec<DisplayUnit> {
    slides
        .iter()
        .map(|s| {
            DisplayUnit::new(UnitKind::Slide { number: s.number }, section_body(&s.content))
                .with_title(escape(&format!("Slide {}: {}", s.number, s.title)))
        })
        .collect()
}
