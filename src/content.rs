// ABOUTME: Content model for slides
// ABOUTME: Closed set of renderable element kinds plus their presentational hints

/// Padding used by size modifiers when none is given.
pub const DEFAULT_PADDING_PX: u32 = 16;

/// Sizing hint attached to a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeModifier {
    /// Fill the viewport minus padding on every side.
    Fill { padding_px: u32 },
    /// Fill `fraction` of the viewport minus padding.
    Fraction { fraction: f32, padding_px: u32 },
}

impl SizeModifier {
    pub fn fill() -> Self {
        SizeModifier::Fill {
            padding_px: DEFAULT_PADDING_PX,
        }
    }

    pub fn fraction(fraction: f32) -> Self {
        SizeModifier::Fraction {
            fraction,
            padding_px: DEFAULT_PADDING_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
        }
    }

    /// Map a numeric level; anything outside 1..=4 has no heading tag.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            _ => None,
        }
    }
}

/// Reveal animation applied to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentAnimation {
    #[default]
    FadeIn,
    FadeOut,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Grow,
    Shrink,
    HighlightRed,
    HighlightGreen,
    HighlightBlue,
}

impl FragmentAnimation {
    /// CSS class added next to `fragment`; fade-in is the runtime default and has none.
    pub fn css_class(&self) -> &'static str {
        match self {
            FragmentAnimation::FadeIn => "",
            FragmentAnimation::FadeOut => "fade-out",
            FragmentAnimation::FadeUp => "fade-up",
            FragmentAnimation::FadeDown => "fade-down",
            FragmentAnimation::FadeLeft => "fade-left",
            FragmentAnimation::FadeRight => "fade-right",
            FragmentAnimation::Grow => "grow",
            FragmentAnimation::Shrink => "shrink",
            FragmentAnimation::HighlightRed => "highlight-red",
            FragmentAnimation::HighlightGreen => "highlight-green",
            FragmentAnimation::HighlightBlue => "highlight-blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Color(String),
    Gradient(String),
    Image(String),
    Video(String),
}

impl Background {
    /// Section attribute carrying this background.
    pub fn attribute(&self) -> (&'static str, &str) {
        match self {
            Background::Color(color) => ("data-background", color.as_str()),
            Background::Gradient(gradient) => ("data-background-gradient", gradient.as_str()),
            Background::Image(url) => ("data-background", url.as_str()),
            Background::Video(url) => ("data-background-video", url.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    pub width: Option<String>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Header {
        level: HeadingLevel,
        text: String,
        classes: Option<String>,
    },
    Paragraph {
        text: String,
        classes: Option<String>,
    },
    List {
        items: Vec<String>,
        ordered: bool,
    },
    Code {
        language: String,
        source: String,
        /// Encoded `data-line-numbers` value, e.g. `|4,8-10|15`.
        highlight: Option<String>,
        show_line_numbers: bool,
        data_id: Option<String>,
    },
    Math {
        formula: String,
        display: bool,
    },
    Image {
        src: String,
        alt: String,
        width: Option<String>,
        height: Option<String>,
    },
    Video {
        src: String,
        width: String,
        height: String,
        controls: bool,
    },
    Fragment {
        text: String,
        animation: FragmentAnimation,
        index: Option<u32>,
    },
    Columns(Vec<Column>),
}

/// One renderable unit of a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub content: Content,
    pub size: Option<SizeModifier>,
}

impl Element {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            size: None,
        }
    }

    pub fn sized(content: Content, size: SizeModifier) -> Self {
        Self {
            content,
            size: Some(size),
        }
    }
}

impl From<Content> for Element {
    fn from(content: Content) -> Self {
        Element::new(content)
    }
}
