// ABOUTME: Slide builders for the reveal-slides DSL
// ABOUTME: Accumulates content elements and slide metadata in authoring order

use crate::config::Transition;
use crate::content::{
    Background, Column, Content, Element, FragmentAnimation, HeadingLevel, SizeModifier,
};
use crate::highlight::HighlightSteps;
use std::collections::BTreeMap;

/// Build a CSS `linear-gradient` value.
pub fn linear_gradient(angle_deg: i32, colors: &[&str]) -> String {
    format!("linear-gradient({}deg, {})", angle_deg, colors.join(", "))
}

/// Optional settings for a code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeOptions {
    pub highlight: Option<String>,
    pub show_line_numbers: bool,
    pub data_id: Option<String>,
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            highlight: None,
            show_line_numbers: true,
            data_id: None,
        }
    }
}

impl CodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use composed highlight steps. An empty composition leaves no highlight.
    pub fn highlight(mut self, steps: impl Into<HighlightSteps>) -> Self {
        let encoded = steps.into().to_attribute();
        self.highlight = if encoded.is_empty() {
            None
        } else {
            Some(encoded)
        };
        self
    }

    /// Use pre-encoded steps such as `"1-3"`, `"5"`; joined with `|`.
    pub fn steps(mut self, steps: &[&str]) -> Self {
        let joined = steps.join("|");
        self.highlight = if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        };
        self
    }

    pub fn line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Identifier used by the runtime to morph code between slides.
    pub fn data_id(mut self, id: impl Into<String>) -> Self {
        self.data_id = Some(id.into());
        self
    }
}

/// Builder for one slide (`<section>`).
#[derive(Debug, Clone, Default)]
pub struct SlideBuilder {
    pub(crate) content: Vec<Element>,
    pub(crate) background: Option<Background>,
    pub(crate) transition: Option<Transition>,
    pub(crate) notes: Option<String>,
    pub(crate) attributes: BTreeMap<String, String>,
    next_size: Option<SizeModifier>,
}

impl SlideBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    // Sizing. The modifier attaches to the next element only; if nothing
    // follows it is dropped.

    pub fn fill(&mut self) {
        self.next_size = Some(SizeModifier::fill());
    }

    pub fn fill_padded(&mut self, padding_px: u32) {
        self.next_size = Some(SizeModifier::Fill { padding_px });
    }

    pub fn size(&mut self, fraction: f32) {
        self.next_size = Some(SizeModifier::fraction(fraction));
    }

    pub fn size_padded(&mut self, fraction: f32, padding_px: u32) {
        self.next_size = Some(SizeModifier::Fraction {
            fraction,
            padding_px,
        });
    }

    /// Append an element. A pending size modifier is consumed either way;
    /// it only applies when the element has no size of its own.
    pub fn push(&mut self, element: impl Into<Element>) {
        let mut element = element.into();
        let pending = self.next_size.take();
        if element.size.is_none() {
            element.size = pending;
        }
        self.content.push(element);
    }

    // Text

    pub fn heading(&mut self, level: HeadingLevel, text: impl Into<String>, classes: Option<&str>) {
        self.push(Content::Header {
            level,
            text: text.into(),
            classes: classes.map(str::to_string),
        });
    }

    pub fn h1(&mut self, text: impl Into<String>) {
        self.heading(HeadingLevel::H1, text, None);
    }

    pub fn h2(&mut self, text: impl Into<String>) {
        self.heading(HeadingLevel::H2, text, None);
    }

    pub fn h3(&mut self, text: impl Into<String>) {
        self.heading(HeadingLevel::H3, text, None);
    }

    pub fn h4(&mut self, text: impl Into<String>) {
        self.heading(HeadingLevel::H4, text, None);
    }

    pub fn p(&mut self, text: impl Into<String>) {
        self.push(Content::Paragraph {
            text: text.into(),
            classes: None,
        });
    }

    pub fn p_class(&mut self, text: impl Into<String>, classes: &str) {
        self.push(Content::Paragraph {
            text: text.into(),
            classes: Some(classes.to_string()),
        });
    }

    pub fn ul(&mut self, init: impl FnOnce(&mut ListBuilder)) {
        let mut list = ListBuilder::default();
        init(&mut list);
        self.push(Content::List {
            items: list.items,
            ordered: false,
        });
    }

    pub fn ol(&mut self, init: impl FnOnce(&mut ListBuilder)) {
        let mut list = ListBuilder::default();
        init(&mut list);
        self.push(Content::List {
            items: list.items,
            ordered: true,
        });
    }

    // Code

    pub fn code_with(
        &mut self,
        language: impl Into<String>,
        source: impl Into<String>,
        options: CodeOptions,
    ) {
        self.push(Content::Code {
            language: language.into(),
            source: source.into(),
            highlight: options.highlight,
            show_line_numbers: options.show_line_numbers,
            data_id: options.data_id,
        });
    }

    pub fn code(&mut self, language: impl Into<String>, source: impl Into<String>) {
        self.code_with(language, source, CodeOptions::default());
    }

    pub fn code_steps(&mut self, language: impl Into<String>, source: impl Into<String>, steps: &[&str]) {
        self.code_with(language, source, CodeOptions::new().steps(steps));
    }

    pub fn code_highlighted(
        &mut self,
        language: impl Into<String>,
        source: impl Into<String>,
        highlight: impl Into<HighlightSteps>,
    ) {
        self.code_with(language, source, CodeOptions::new().highlight(highlight));
    }

    pub fn kt(&mut self, source: impl Into<String>) {
        self.code("kotlin", source);
    }

    pub fn js(&mut self, source: impl Into<String>) {
        self.code("javascript", source);
    }

    pub fn html(&mut self, source: impl Into<String>) {
        self.code("html", source);
    }

    pub fn rs(&mut self, source: impl Into<String>) {
        self.code("rust", source);
    }

    pub fn kt_with(&mut self, source: impl Into<String>, options: CodeOptions) {
        self.code_with("kotlin", source, options);
    }

    pub fn js_with(&mut self, source: impl Into<String>, options: CodeOptions) {
        self.code_with("javascript", source, options);
    }

    pub fn html_with(&mut self, source: impl Into<String>, options: CodeOptions) {
        self.code_with("html", source, options);
    }

    pub fn rs_with(&mut self, source: impl Into<String>, options: CodeOptions) {
        self.code_with("rust", source, options);
    }

    pub fn kt_steps(&mut self, source: impl Into<String>, steps: &[&str]) {
        self.code_steps("kotlin", source, steps);
    }

    pub fn js_steps(&mut self, source: impl Into<String>, steps: &[&str]) {
        self.code_steps("javascript", source, steps);
    }

    pub fn html_steps(&mut self, source: impl Into<String>, steps: &[&str]) {
        self.code_steps("html", source, steps);
    }

    pub fn kt_highlighted(&mut self, source: impl Into<String>, highlight: impl Into<HighlightSteps>) {
        self.code_highlighted("kotlin", source, highlight);
    }

    pub fn js_highlighted(&mut self, source: impl Into<String>, highlight: impl Into<HighlightSteps>) {
        self.code_highlighted("javascript", source, highlight);
    }

    pub fn html_highlighted(&mut self, source: impl Into<String>, highlight: impl Into<HighlightSteps>) {
        self.code_highlighted("html", source, highlight);
    }

    // Math and media

    pub fn math(&mut self, formula: impl Into<String>, display: bool) {
        self.push(Content::Math {
            formula: formula.into(),
            display,
        });
    }

    pub fn image(
        &mut self,
        src: impl Into<String>,
        alt: impl Into<String>,
        width: Option<&str>,
        height: Option<&str>,
    ) {
        self.push(Content::Image {
            src: src.into(),
            alt: alt.into(),
            width: width.map(str::to_string),
            height: height.map(str::to_string),
        });
    }

    /// Animated images are plain images to the runtime.
    pub fn gif(
        &mut self,
        src: impl Into<String>,
        alt: impl Into<String>,
        width: Option<&str>,
        height: Option<&str>,
    ) {
        self.image(src, alt, width, height);
    }

    pub fn video(&mut self, src: impl Into<String>) {
        self.video_with(src, "400", "300", true);
    }

    pub fn video_with(
        &mut self,
        src: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        controls: bool,
    ) {
        self.push(Content::Video {
            src: src.into(),
            width: width.into(),
            height: height.into(),
            controls,
        });
    }

    // Layout

    pub fn fragment(&mut self, text: impl Into<String>, animation: FragmentAnimation, index: Option<u32>) {
        self.push(Content::Fragment {
            text: text.into(),
            animation,
            index,
        });
    }

    pub fn columns(&mut self, init: impl FnOnce(&mut ColumnsBuilder)) {
        let mut columns = ColumnsBuilder::default();
        init(&mut columns);
        self.push(Content::Columns(columns.columns));
    }

    // Slide metadata. Each setter replaces any earlier value.

    pub fn background(&mut self, color: impl Into<String>) {
        self.background = Some(Background::Color(color.into()));
    }

    pub fn background_gradient(&mut self, gradient: impl Into<String>) {
        self.background = Some(Background::Gradient(gradient.into()));
    }

    pub fn background_gradient_angle(&mut self, angle_deg: i32, colors: &[&str]) {
        self.background = Some(Background::Gradient(linear_gradient(angle_deg, colors)));
    }

    pub fn background_image(&mut self, url: impl Into<String>) {
        self.background = Some(Background::Image(url.into()));
    }

    pub fn background_video(&mut self, url: impl Into<String>) {
        self.background = Some(Background::Video(url.into()));
    }

    pub fn transition(&mut self, transition: Transition) {
        self.transition = Some(transition);
    }

    pub fn notes(&mut self, text: impl Into<String>) {
        self.notes = Some(text.into());
    }

    /// Free-form attribute on the slide's section.
    pub fn attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }
}

#[derive(Debug, Default)]
pub struct ListBuilder {
    items: Vec<String>,
}

impl ListBuilder {
    pub fn item(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
    }
}

#[derive(Debug, Default)]
pub struct ColumnsBuilder {
    columns: Vec<Column>,
}

impl ColumnsBuilder {
    /// Add a column; `width` is any CSS length, e.g. `"50%"`.
    pub fn column(&mut self, width: Option<&str>, init: impl FnOnce(&mut ColumnBuilder)) {
        let mut builder = ColumnBuilder::default();
        init(&mut builder);
        self.columns.push(Column {
            width: width.map(str::to_string),
            paragraphs: builder.paragraphs,
        });
    }
}

#[derive(Debug, Default)]
pub struct ColumnBuilder {
    paragraphs: Vec<String>,
}

impl ColumnBuilder {
    pub fn p(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }
}

/// Slides stacked for vertical navigation.
#[derive(Debug, Default)]
pub struct VerticalSlidesBuilder {
    pub(crate) slides: Vec<SlideBuilder>,
}

impl VerticalSlidesBuilder {
    pub fn slide(&mut self, init: impl FnOnce(&mut SlideBuilder)) {
        let mut slide = SlideBuilder::new();
        init(&mut slide);
        self.slides.push(slide);
    }
}
