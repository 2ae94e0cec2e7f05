use serde::Serialize;

/// Icon shown beside a unit, named after the icon set the markup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    HelpCircle,
    CheckCircle,
    Alert,
    Info,
    FileText,
    List,
    Message,
    Book,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HelpCircle => "help-circle",
            Self::CheckCircle => "check-circle",
            Self::Alert => "alert",
            Self::Info => "info",
            Self::FileText => "file-text",
            Self::List => "list",
            Self::Message => "message",
            Self::Book => "book",
        }
    }
}

/// Border and accent color of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Primary,
    Blue,
    Green,
    Yellow,
    Purple,
    Gray,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

/// Icon and tone of the answer line under a question.
pub const ANSWER_ICON: Icon = Icon::CheckCircle;
pub const ANSWER_TONE: Tone = Tone::Green;

/// Semantic kind of a display unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnitKind {
    Header { level: u8 },
    Text,
    List,
    Question,
    Code { lang: Option<String> },
    Quote,
    Note,
    Warning,
    Info,
    /// A `{header, content}` card.
    Section,
    /// A presentation slide, numbered by position.
    Slide { number: usize },
}

impl UnitKind {
    pub fn icon(&self) -> Option<Icon> {
        match self {
            Self::Question => Some(Icon::HelpCircle),
            Self::Warning => Some(Icon::Alert),
            Self::Info => Some(Icon::Info),
            Self::Note => Some(Icon::FileText),
            Self::List => Some(Icon::List),
            Self::Quote => Some(Icon::Message),
            Self::Code { .. } => Some(Icon::Book),
            Self::Header { .. } | Self::Text | Self::Section | Self::Slide { .. } => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Header { .. } => Tone::Primary,
            Self::Question | Self::Info => Tone::Blue,
            Self::Warning => Tone::Yellow,
            Self::Note => Tone::Purple,
            Self::Text
            | Self::List
            | Self::Code { .. }
            | Self::Quote
            | Self::Section
            | Self::Slide { .. } => Tone::Gray,
        }
    }

    /// Short name used for CSS classes and terminal labels.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Text => "text",
            Self::List => "list",
            Self::Question => "question",
            Self::Code { .. } => "code",
            Self::Quote => "quote",
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Section => "section",
            Self::Slide { .. } => "slide",
        }
    }
}

/// Text size class for a header level. Levels past 3 share the smallest.
pub fn heading_scale(level: u8) -> &'static str {
    match level {
        0 | 1 => "2xl",
        2 => "xl",
        _ => "lg",
    }
}

/// What a unit shows under its title.
///
/// `Plain` holds verbatim source text and must be escaped by whoever emits
/// it. `Inline` and `Items` already hold escaped markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UnitBody {
    Empty,
    Plain(String),
    Inline(String),
    Items(Vec<String>),
}

impl UnitBody {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Plain(s) | Self::Inline(s) => s.is_empty(),
            Self::Items(items) => items.is_empty(),
        }
    }
}

/// One presentation-ready unit. `title` and `footer` are escaped markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayUnit {
    pub kind: UnitKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: UnitBody,
    /// Answer line for questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Header a list was attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl DisplayUnit {
    pub fn new(kind: UnitKind, body: UnitBody) -> Self {
        Self {
            kind,
            title: None,
            body,
            footer: None,
            group: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = group;
        self
    }

    pub fn icon(&self) -> Option<Icon> {
        self.kind.icon()
    }

    pub fn tone(&self) -> Tone {
        self.kind.tone()
    }
}
