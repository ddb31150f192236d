// ABOUTME: HTML generation module for the reveal-slides library
// ABOUTME: Markup writer plus assembly of the complete reveal.js document

use crate::config::PresentationConfig;
use crate::errors::Result;
use crate::presentation::SlideGroup;
use crate::render;
use crate::utils;
use log::{debug, info};
use quick_xml::escape::escape;
use std::borrow::Cow;
use std::path::Path;

const STYLESHEETS: [&str; 4] = [
    "dist/reset.css",
    "dist/reveal.css",
    "dist/theme/jetbrains.css",
    "plugin/highlight/monokai.css",
];

const PLUGIN_SCRIPTS: [&str; 6] = [
    "dist/reveal.js",
    "plugin/zoom/zoom.js",
    "plugin/notes/notes.js",
    "plugin/search/search.js",
    "plugin/markdown/markdown.js",
    "plugin/highlight/highlight.js",
];

const PLUGINS: [&str; 5] = [
    "RevealZoom",
    "RevealNotes",
    "RevealSearch",
    "RevealMarkdown",
    "RevealHighlight",
];

const MATH_SCRIPT: &str = "plugin/math/math.js";
const MATH_PLUGIN: &str = "RevealMath";

/// A start tag under construction. Attribute values are escaped on output;
/// `None` values produce bare boolean attributes.
#[derive(Debug, Clone)]
pub struct Tag<'a> {
    name: &'a str,
    attrs: Vec<(Cow<'a, str>, Option<Cow<'a, str>>)>,
}

impl<'a> Tag<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        self.attrs.push((name.into(), Some(value.into())));
        self
    }

    pub fn attr_opt<V: Into<Cow<'a, str>>>(self, name: &'a str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn flag(mut self, name: &'a str) -> Self {
        self.attrs.push((Cow::Borrowed(name), None));
        self
    }

    pub fn start(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for (name, value) in &self.attrs {
            tag.push(' ');
            tag.push_str(name);
            if let Some(value) = value {
                tag.push_str("=\"");
                tag.push_str(&escape(value.as_ref()));
                tag.push('"');
            }
        }
        tag.push('>');
        tag
    }

    pub fn end(&self) -> String {
        format!("</{}>", self.name)
    }
}

/// Indenting markup writer. One element per line; block elements nest.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    indent_level: usize,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
    }

    /// Emit a start tag and nest everything until the matching [`close`](Self::close).
    pub fn open(&mut self, tag: &Tag) {
        self.indent();
        self.out.push_str(&tag.start());
        self.out.push('\n');
        self.indent_level += 1;
    }

    pub fn close(&mut self, name: &str) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.indent();
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push_str(">\n");
    }

    /// Element with escaped text content on a single line.
    pub fn text_element(&mut self, tag: &Tag, text: &str) {
        self.indent();
        self.out.push_str(&tag.start());
        self.out.push_str(&escape(text));
        self.out.push_str(&tag.end());
        self.out.push('\n');
    }

    /// Element with an unescaped body, e.g. script sources.
    pub fn raw_element(&mut self, tag: &Tag, body: &str) {
        self.indent();
        self.out.push_str(&tag.start());
        self.out.push_str(body);
        self.out.push_str(&tag.end());
        self.out.push('\n');
    }

    pub fn void(&mut self, tag: &Tag) {
        self.indent();
        self.out.push_str(&tag.start());
        self.out.push('\n');
    }

    /// Unescaped line at the current indentation.
    pub fn line(&mut self, raw: &str) {
        self.indent();
        self.out.push_str(raw);
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Assemble the complete document for a deck. Pure and deterministic.
pub fn generate_html(config: &PresentationConfig, groups: &[SlideGroup]) -> String {
    debug!("Assembling document with {} slide groups", groups.len());

    let mut w = HtmlWriter::new();
    w.line("<!doctype html>");
    w.open(&Tag::new("html").attr("lang", "en"));

    write_head(&mut w, config);

    w.open(&Tag::new("body"));
    w.open(&Tag::new("div").attr("class", "reveal"));
    w.open(&Tag::new("div").attr("class", "slides"));
    for group in groups {
        render::render_group(group, &mut w);
    }
    w.close("div");
    w.close("div");

    for src in PLUGIN_SCRIPTS {
        w.raw_element(&Tag::new("script").attr("src", src), "");
    }
    if config.math_enabled {
        w.raw_element(&Tag::new("script").attr("src", MATH_SCRIPT), "");
    }
    write_initialize(&mut w, config);

    w.close("body");
    w.close("html");
    w.finish()
}

fn write_head(w: &mut HtmlWriter, config: &PresentationConfig) {
    w.open(&Tag::new("head"));
    w.void(&Tag::new("meta").attr("charset", "utf-8"));
    w.text_element(&Tag::new("title"), &config.title);
    w.void(&meta("description", &config.description));
    w.void(&meta("author", &config.author));
    w.void(&meta("apple-mobile-web-app-capable", "yes"));
    w.void(&meta(
        "apple-mobile-web-app-status-bar-style",
        "black-translucent",
    ));
    w.void(&meta("viewport", "width=device-width, initial-scale=1.0"));
    for href in STYLESHEETS {
        let mut link = Tag::new("link").attr("rel", "stylesheet").attr("href", href);
        if href.starts_with("dist/theme/") {
            link = link.attr("id", "theme");
        }
        w.void(&link);
    }
    w.close("head");
}

fn meta<'a>(name: &'a str, content: &'a str) -> Tag<'a> {
    Tag::new("meta").attr("name", name).attr("content", content)
}

fn write_initialize(w: &mut HtmlWriter, config: &PresentationConfig) {
    let mut plugins = PLUGINS.to_vec();
    if config.math_enabled {
        plugins.push(MATH_PLUGIN);
    }

    w.open(&Tag::new("script"));
    w.line("Reveal.initialize({");
    w.line("  hash: true,");
    w.line(&format!("  controls: {},", config.controls));
    w.line(&format!("  progress: {},", config.progress));
    w.line(&format!("  center: {},", config.center));
    w.line(&format!("  transition: '{}',", config.transition));
    w.line(&format!("  plugins: [ {} ]", plugins.join(", ")));
    w.line("});");
    w.close("script");
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            utils::validate_directory_exists(parent)?;
        }
    }

    utils::write_atomic(output_path, html_content)?;

    info!("Presentation saved to: {:?}", output_path);
    Ok(())
}
