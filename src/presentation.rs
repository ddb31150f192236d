// ABOUTME: Deck builder for the reveal-slides DSL
// ABOUTME: Composes slides into playback order and produces the final document

use crate::config::PresentationConfig;
use crate::errors::Result;
use crate::html;
use crate::slide::{SlideBuilder, VerticalSlidesBuilder};
use std::path::Path;

/// One unit of horizontal navigation.
#[derive(Debug, Clone)]
pub enum SlideGroup {
    Single(SlideBuilder),
    /// Slides reached by navigating down from the first one.
    Vertical(Vec<SlideBuilder>),
}

#[derive(Debug, Clone, Default)]
pub struct PresentationBuilder {
    slides: Vec<SlideGroup>,
    config: PresentationConfig,
}

impl PresentationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the deck configuration in place.
    pub fn config(&mut self, init: impl FnOnce(&mut PresentationConfig)) {
        init(&mut self.config);
    }

    /// Replace the deck configuration wholesale.
    pub fn with_config(&mut self, config: PresentationConfig) {
        self.config = config;
    }

    pub fn configuration(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn groups(&self) -> &[SlideGroup] {
        &self.slides
    }

    pub fn slide(&mut self, init: impl FnOnce(&mut SlideBuilder)) {
        let mut slide = SlideBuilder::new();
        init(&mut slide);
        self.slides.push(SlideGroup::Single(slide));
    }

    pub fn vertical_slides(&mut self, init: impl FnOnce(&mut VerticalSlidesBuilder)) {
        let mut vertical = VerticalSlidesBuilder::default();
        init(&mut vertical);
        self.slides.push(SlideGroup::Vertical(vertical.slides));
    }

    /// Render the whole deck. Calling this repeatedly yields identical output.
    pub fn generate_html(&self) -> String {
        html::generate_html(&self.config, &self.slides)
    }

    /// Render and replace `path` in one step; a failed write never leaves a
    /// partial document behind.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        html::write_html_to_file(&self.generate_html(), path)
    }
}

/// Build a deck with the DSL.
///
/// ```ignore
/// let deck = presentation(|p| {
///     p.config(|c| c.title = "Talk".to_string());
///     p.slide(|s| s.h1("Hello"));
/// });
/// ```
pub fn presentation(init: impl FnOnce(&mut PresentationBuilder)) -> PresentationBuilder {
    let mut presentation = PresentationBuilder::new();
    init(&mut presentation);
    presentation
}
