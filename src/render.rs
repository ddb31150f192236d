// ABOUTME: Slide rendering module for the reveal-slides library
// ABOUTME: Turns slides and their content elements into reveal.js sections

use crate::content::{Column, Content, Element, SizeModifier};
use crate::html::{HtmlWriter, Tag};
use crate::presentation::SlideGroup;
use crate::slide::SlideBuilder;
use log::{debug, warn};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Inline style for a size modifier.
pub fn size_style(size: Option<&SizeModifier>) -> Option<String> {
    let (width, height, padding) = match size? {
        SizeModifier::Fill { padding_px } => (
            format!("100vw - {}px", 2 * u64::from(*padding_px)),
            format!("100vh - {}px", 2 * u64::from(*padding_px)),
            *padding_px,
        ),
        SizeModifier::Fraction {
            fraction,
            padding_px,
        } => (
            format!("100vw * {} - {}px", fraction, 2 * u64::from(*padding_px)),
            format!("100vh * {} - {}px", fraction, 2 * u64::from(*padding_px)),
            *padding_px,
        ),
    };
    Some(format!(
        "width: calc({}); height: calc({}); padding: {}px; box-sizing: border-box; margin: 0 auto;",
        width, height, padding
    ))
}

/// Render a top-level group: a lone section, or a section nesting the
/// vertical stack.
pub fn render_group(group: &SlideGroup, w: &mut HtmlWriter) {
    match group {
        SlideGroup::Single(slide) => {
            debug!("Rendering slide with {} elements", slide.len());
            render_slide(slide, w);
        }
        SlideGroup::Vertical(slides) => {
            debug!("Rendering vertical group of {} slides", slides.len());
            w.open(&Tag::new("section"));
            for slide in slides {
                render_slide(slide, w);
            }
            w.close("section");
        }
    }
}

/// Section attributes in application order: background, transition, then
/// free-form attributes, each overwriting the same key.
fn section_attributes(slide: &SlideBuilder) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();

    if let Some(background) = &slide.background {
        let (name, value) = background.attribute();
        attributes.insert(name.to_string(), value.to_string());
    }
    if let Some(transition) = slide.transition {
        attributes.insert("data-transition".to_string(), transition.to_string());
    }
    for (name, value) in &slide.attributes {
        if let Some(previous) = attributes.insert(name.clone(), value.clone()) {
            warn!(
                "Slide attribute {} = {:?} overrides computed value {:?}",
                name, value, previous
            );
        }
    }

    attributes
}

pub fn render_slide(slide: &SlideBuilder, w: &mut HtmlWriter) {
    let attributes = section_attributes(slide);
    let mut section = Tag::new("section");
    for (name, value) in &attributes {
        section = section.attr(name.as_str(), value.as_str());
    }

    w.open(&section);
    for element in &slide.content {
        render_element(element, w);
    }
    if let Some(notes) = &slide.notes {
        w.text_element(&Tag::new("aside").attr("class", "notes"), notes);
    }
    w.close("section");
}

pub fn render_element(element: &Element, w: &mut HtmlWriter) {
    let style = size_style(element.size.as_ref());

    match &element.content {
        Content::Header {
            level,
            text,
            classes,
        } => {
            let tag = Tag::new(level.tag())
                .attr_opt("class", classes.as_deref())
                .attr_opt("style", style);
            w.text_element(&tag, text);
        }
        Content::Paragraph { text, classes } => {
            let tag = Tag::new("p")
                .attr_opt("class", classes.as_deref())
                .attr_opt("style", style);
            w.text_element(&tag, text);
        }
        Content::List { items, ordered } => {
            let name = if *ordered { "ol" } else { "ul" };
            w.open(&Tag::new(name).attr_opt("style", style));
            for item in items {
                w.text_element(&Tag::new("li"), item);
            }
            w.close(name);
        }
        Content::Code {
            language,
            source,
            highlight,
            show_line_numbers,
            data_id,
        } => {
            let pre = Tag::new("pre")
                .attr_opt("style", style)
                .attr_opt("data-id", data_id.as_deref());
            let mut code = Tag::new("code")
                .attr("class", format!("hljs {}", language))
                .attr("data-trim", "");
            if *show_line_numbers {
                code = code.attr("data-line-numbers", highlight.as_deref().unwrap_or(""));
            }

            // A body containing '<' goes into an inert template so the
            // browser never parses it as markup.
            let body = if source.contains('<') {
                let template = Tag::new("script").attr("type", "text/template");
                format!(
                    "{}{}{}",
                    template.start(),
                    inert_template_body(source),
                    template.end()
                )
            } else {
                quick_xml::escape::escape(source.as_str()).into_owned()
            };

            w.line(&format!(
                "{}{}{}{}{}",
                pre.start(),
                code.start(),
                body,
                code.end(),
                pre.end()
            ));
        }
        Content::Math { formula, display } => {
            if *display {
                let tag = Tag::new("div")
                    .attr("class", "math-display")
                    .attr_opt("style", style);
                w.text_element(&tag, &format!("\\[{}\\]", formula));
            } else {
                let tag = Tag::new("span")
                    .attr("class", "math-inline")
                    .attr_opt("style", style);
                w.text_element(&tag, &format!("\\({}\\)", formula));
            }
        }
        Content::Image {
            src,
            alt,
            width,
            height,
        } => {
            let tag = Tag::new("img")
                .attr_opt("style", style)
                .attr("src", src.as_str())
                .attr("alt", alt.as_str())
                .attr_opt("width", width.as_deref())
                .attr_opt("height", height.as_deref());
            w.void(&tag);
        }
        Content::Video {
            src,
            width,
            height,
            controls,
        } => {
            let mut tag = Tag::new("video")
                .attr_opt("style", style)
                .attr("src", src.as_str())
                .attr("width", width.as_str())
                .attr("height", height.as_str());
            if *controls {
                tag = tag.flag("controls");
            }
            w.raw_element(&tag, "");
        }
        Content::Fragment {
            text,
            animation,
            index,
        } => {
            let class = match animation.css_class() {
                "" => "fragment".to_string(),
                css => format!("fragment {}", css),
            };
            let tag = Tag::new("p")
                .attr("class", class)
                .attr_opt("style", style)
                .attr_opt("data-fragment-index", index.map(|i| i.to_string()));
            w.text_element(&tag, text);
        }
        Content::Columns(columns) => {
            w.open(
                &Tag::new("div")
                    .attr("class", "r-hstack")
                    .attr_opt("style", style),
            );
            for column in columns {
                render_column(column, w);
            }
            w.close("div");
        }
    }
}

/// Break every `</script` (any case) as `<\/script` so the template region
/// cannot be closed from inside the code sample.
pub fn inert_template_body(source: &str) -> Cow<'_, str> {
    const CLOSER: &[u8] = b"</script";
    let bytes = source.as_bytes();
    let closes_at = |i: usize| {
        bytes.len() >= i + CLOSER.len() && bytes[i..i + CLOSER.len()].eq_ignore_ascii_case(CLOSER)
    };

    if !(0..bytes.len()).any(closes_at) {
        return Cow::Borrowed(source);
    }

    let mut body = String::with_capacity(source.len() + 8);
    let mut last = 0;
    for i in 0..bytes.len() {
        if closes_at(i) {
            body.push_str(&source[last..i + 1]);
            body.push('\\');
            last = i + 1;
        }
    }
    body.push_str(&source[last..]);
    Cow::Owned(body)
}

fn render_column(column: &Column, w: &mut HtmlWriter) {
    let width = column.width.as_ref().map(|width| format!("width: {};", width));
    w.open(&Tag::new("div").attr_opt("style", width));
    for paragraph in &column.paragraphs {
        w.text_element(&Tag::new("p"), paragraph);
    }
    w.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style() {
        let style = size_style(Some(&SizeModifier::fill())).unwrap();
        assert_eq!(
            style,
            "width: calc(100vw - 32px); height: calc(100vh - 32px); padding: 16px; box-sizing: border-box; margin: 0 auto;"
        );
    }

    #[test]
    fn test_fraction_style() {
        let style = size_style(Some(&SizeModifier::Fraction {
            fraction: 0.5,
            padding_px: 8,
        }))
        .unwrap();
        assert!(style.starts_with("width: calc(100vw * 0.5 - 16px); height: calc(100vh * 0.5 - 16px); padding: 8px;"));
    }

    #[test]
    fn test_huge_padding_does_not_overflow() {
        let style = size_style(Some(&SizeModifier::Fill {
            padding_px: u32::MAX,
        }))
        .unwrap();
        assert!(style.starts_with("width: calc(100vw - 8589934590px);"));
        assert!(style.contains("padding: 4294967295px;"));

        let style = size_style(Some(&SizeModifier::Fraction {
            fraction: 0.5,
            padding_px: u32::MAX,
        }))
        .unwrap();
        assert!(style.contains("calc(100vh * 0.5 - 8589934590px)"));
    }

    #[test]
    fn test_template_body_breaks_script_closers() {
        assert_eq!(inert_template_body("<p>x</p>"), "<p>x</p>");
        assert_eq!(
            inert_template_body("<script>a()</script><SCRIPT>b()</Script >"),
            "<script>a()<\\/script><SCRIPT>b()<\\/Script >"
        );
    }

    #[test]
    fn test_no_size_no_style() {
        assert_eq!(size_style(None), None);
    }
}
