//! Input types: the generated text and the tag describing what was generated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentTypeError {
    #[error("unknown content type: {0}")]
    Unknown(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderModeError {
    #[error("unknown render mode: {0} (expected \"cards\" or \"blocks\")")]
    Unknown(String),
}

/// The complete text returned for one generation request.
///
/// Never mutated: a regeneration produces a new `RawContent` that replaces
/// the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawContent(String);

impl RawContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing to show (empty or whitespace only).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The verbatim text handed to a clipboard. Never parsed or reformatted.
    pub fn clipboard_text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawContent {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RawContent {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for RawContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generation category. Selects which card parser applies to a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[default]
    Mcq,
    Worksheet,
    Ppt,
    LessonPlan,
    Youtube,
    Summarize,
    EssayGrade,
    Rewrite,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        Self::Mcq,
        Self::Worksheet,
        Self::Ppt,
        Self::LessonPlan,
        Self::Youtube,
        Self::Summarize,
        Self::EssayGrade,
        Self::Rewrite,
    ];

    /// The wire tag, e.g. `"lesson-plan"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::Worksheet => "worksheet",
            Self::Ppt => "ppt",
            Self::LessonPlan => "lesson-plan",
            Self::Youtube => "youtube",
            Self::Summarize => "summarize",
            Self::EssayGrade => "essay-grade",
            Self::Rewrite => "rewrite",
        }
    }

    /// Human title, also used as the default export filename stem.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Mcq => "MCQs",
            Self::Worksheet => "Worksheet",
            Self::Ppt => "Presentation",
            Self::LessonPlan => "Lesson Plan",
            Self::Youtube => "Script",
            Self::Summarize => "Summary",
            Self::EssayGrade => "Feedback",
            Self::Rewrite => "Rewritten Text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == tag)
            .ok_or(ContentTypeError::Unknown(s.to_string()))
    }
}

/// Which view to build from a text.
///
/// `Cards` uses the content-type-specific parsers; `Blocks` always runs the
/// generic segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Cards,
    Blocks,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Blocks => "blocks",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = RenderModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" => Ok(Self::Cards),
            "blocks" => Ok(Self::Blocks),
            _ => Err(RenderModeError::Unknown(s.to_string())),
        }
    }
}
