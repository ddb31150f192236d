// ABOUTME: Library module for the reveal-slides program.
// ABOUTME: Type-checked deck builder that renders reveal.js HTML.

// Reexport modules
pub mod config;
pub mod content;
pub mod demo;
pub mod errors;
pub mod highlight;
pub mod html;
pub mod presentation;
pub mod render;
pub mod slide;
pub mod utils;

// Reexport common types and functions
pub use config::{Config, PresentationConfig, Transition};
pub use content::{
    Background, Column, Content, Element, FragmentAnimation, HeadingLevel, SizeModifier,
};
pub use errors::{DeckError, Result};
pub use highlight::{HighlightSteps, Lines};
pub use html::{generate_html, write_html_to_file};
pub use presentation::{presentation, PresentationBuilder, SlideGroup};
pub use slide::{linear_gradient, CodeOptions, SlideBuilder};

#[cfg(test)]
mod tests;
