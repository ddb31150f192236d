use super::*;
use crate::html::HtmlWriter;
use crate::render::render_slide;

fn render(slide: &SlideBuilder) -> String {
    let mut w = HtmlWriter::new();
    render_slide(slide, &mut w);
    w.finish()
}

fn slide_with(init: impl FnOnce(&mut SlideBuilder)) -> SlideBuilder {
    let mut slide = SlideBuilder::new();
    init(&mut slide);
    slide
}

#[test]
fn test_elements_keep_authoring_order() {
    let slide = slide_with(|s| {
        s.h2("first");
        s.p("second");
        s.math("x^2", false);
        s.h4("third");
        s.p("fourth");
    });
    assert_eq!(slide.len(), 5);

    let html = render(&slide);
    let positions: Vec<usize> = ["first", "second", "x^2", "third", "fourth"]
        .iter()
        .map(|needle| html.find(needle).expect("missing element"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn test_size_modifier_is_one_shot() {
    let slide = slide_with(|s| {
        s.fill();
        s.p("a");
        s.p("b");
    });

    assert_eq!(slide.elements()[0].size, Some(SizeModifier::fill()));
    assert_eq!(slide.elements()[1].size, None);

    let html = render(&slide);
    assert!(html.contains(
        "<p style=\"width: calc(100vw - 32px); height: calc(100vh - 32px); padding: 16px; box-sizing: border-box; margin: 0 auto;\">a</p>"
    ));
    assert!(html.contains("<p>b</p>"));
}

#[test]
fn test_trailing_size_modifier_is_discarded() {
    let slide = slide_with(|s| {
        s.p("only");
        s.size(0.5);
    });
    assert_eq!(slide.len(), 1);
    assert_eq!(slide.elements()[0].size, None);
    assert!(!render(&slide).contains("style="));
}

#[test]
fn test_explicit_size_wins_over_pending() {
    let slide = slide_with(|s| {
        s.fill();
        s.push(Element::sized(
            Content::Paragraph {
                text: "x".to_string(),
                classes: None,
            },
            SizeModifier::fraction(0.25),
        ));
        s.p("y");
    });
    assert_eq!(slide.elements()[0].size, Some(SizeModifier::fraction(0.25)));
    assert_eq!(slide.elements()[1].size, None);
}

#[test]
fn test_background_last_write_wins() {
    let slide = slide_with(|s| {
        s.background("#000000");
        s.background("#ffffff");
        s.h1("bg");
    });
    let html = render(&slide);
    assert!(html.contains("<section data-background=\"#ffffff\">"));
    assert!(!html.contains("#000000"));
}

#[test]
fn test_background_kinds_map_to_attributes() {
    let gradient = render(&slide_with(|s| s.background_gradient_angle(135, &["#3574F0", "#000000"])));
    assert!(gradient.contains("data-background-gradient=\"linear-gradient(135deg, #3574F0, #000000)\""));

    let image = render(&slide_with(|s| s.background_image("bg.png")));
    assert!(image.contains("data-background=\"bg.png\""));

    let video = render(&slide_with(|s| {
        s.background_image("bg.png");
        s.background_video("bg.mp4");
    }));
    assert!(video.contains("data-background-video=\"bg.mp4\""));
    assert!(!video.contains("bg.png"));
}

#[test]
fn test_transition_and_free_form_attributes() {
    let slide = slide_with(|s| {
        s.transition(Transition::Zoom);
        s.transition(Transition::Convex);
        s.attribute("data-state", "intro");
        s.attribute("data-state", "outro");
    });
    let html = render(&slide);
    assert!(html.contains("data-transition=\"convex\""));
    assert!(html.contains("data-state=\"outro\""));
    assert!(!html.contains("zoom"));
    assert!(!html.contains("intro"));
}

#[test]
fn test_free_form_attribute_overrides_computed() {
    let slide = slide_with(|s| {
        s.background("#000000");
        s.attribute("data-background", "#123456");
    });
    let html = render(&slide);
    assert!(html.contains("data-background=\"#123456\""));
    assert!(!html.contains("#000000"));
}

#[test]
fn test_notes_render_as_aside() {
    let slide = slide_with(|s| {
        s.h2("Talk");
        s.notes("first draft");
        s.notes("Say hello & smile");
    });
    let html = render(&slide);
    assert!(html.contains("<aside class=\"notes\">Say hello &amp; smile</aside>"));
    assert!(!html.contains("first draft"));
    assert!(html.find("<h2>").unwrap() < html.find("<aside").unwrap());
}

#[test]
fn test_code_attributes() {
    let slide = slide_with(|s| {
        s.code_highlighted(
            "kotlin",
            "val a = 1",
            (Lines::of(&[4]) & Lines::range(8..=10)) + Lines::of(&[15]),
        );
    });
    let html = render(&slide);
    assert!(html.contains(
        "<pre><code class=\"hljs kotlin\" data-trim=\"\" data-line-numbers=\"|4,8-10|15\">val a = 1</code></pre>"
    ));
}

#[test]
fn test_code_without_line_numbers_and_with_id() {
    let slide = slide_with(|s| {
        s.code_with(
            "rust",
            "let x = 1;",
            CodeOptions::new()
                .steps(&["1", "2"])
                .line_numbers(false)
                .data_id("morph"),
        );
    });
    let html = render(&slide);
    assert!(html.contains("<pre data-id=\"morph\"><code class=\"hljs rust\" data-trim=\"\">let x = 1;</code></pre>"));
    assert!(!html.contains("data-line-numbers"));
}

#[test]
fn test_code_steps_blank_degrades_to_plain_numbers() {
    let slide = slide_with(|s| {
        s.kt_steps("fun a() = 1", &[]);
        s.js_steps("a()", &["1", "2-3"]);
        s.code_highlighted("text", "b", HighlightSteps::new());
    });
    let html = render(&slide);
    assert!(html.contains("<code class=\"hljs kotlin\" data-trim=\"\" data-line-numbers=\"\">"));
    assert!(html.contains("<code class=\"hljs javascript\" data-trim=\"\" data-line-numbers=\"1|2-3\">"));
    assert!(html.contains("<code class=\"hljs text\" data-trim=\"\" data-line-numbers=\"\">"));
}

#[test]
fn test_code_with_markup_uses_template() {
    let source = "<div class=\"box\">1 < 2</div>";
    let slide = slide_with(|s| s.html(source));
    let html = render(&slide);
    assert!(html.contains(&format!(
        "<script type=\"text/template\">{}</script>",
        source
    )));
    assert!(!html.contains("&lt;div"));
}

#[test]
fn test_code_without_markup_is_escaped_text() {
    let slide = slide_with(|s| s.rs("a && b > c"));
    let html = render(&slide);
    assert!(html.contains(">a &amp;&amp; b &gt; c</code>"));
    assert!(!html.contains("text/template"));
}

#[test]
fn test_math_delimiters() {
    let slide = slide_with(|s| {
        s.math("E = mc^2", false);
        s.math("a + b", true);
    });
    let html = render(&slide);
    assert!(html.contains("<span class=\"math-inline\">\\(E = mc^2\\)</span>"));
    assert!(html.contains("<div class=\"math-display\">\\[a + b\\]</div>"));
}

#[test]
fn test_lists() {
    let slide = slide_with(|s| {
        s.ul(|l| {
            l.item("one");
            l.item("two");
        });
        s.ol(|l| l.item("first"));
    });
    let html = render(&slide);
    assert!(html.contains("<ul>\n"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains("<li>two</li>"));
    assert!(html.contains("<ol>\n"));
    assert!(html.contains("<li>first</li>"));
}

#[test]
fn test_headings_and_classes() {
    let slide = slide_with(|s| {
        s.h1("one");
        s.heading(HeadingLevel::H3, "three", Some("r-fit-text"));
        s.p_class("para", "small");
    });
    let html = render(&slide);
    assert!(html.contains("<h1>one</h1>"));
    assert!(html.contains("<h3 class=\"r-fit-text\">three</h3>"));
    assert!(html.contains("<p class=\"small\">para</p>"));
    assert_eq!(HeadingLevel::from_level(5), None);
    assert_eq!(HeadingLevel::from_level(2), Some(HeadingLevel::H2));
}

#[test]
fn test_media() {
    let slide = slide_with(|s| {
        s.image("cat.png", "A cat", Some("200"), None);
        s.gif("dance.gif", "", None, Some("100"));
        s.video("clip.mp4");
        s.video_with("mute.mp4", "640", "480", false);
    });
    let html = render(&slide);
    assert!(html.contains("<img src=\"cat.png\" alt=\"A cat\" width=\"200\">"));
    assert!(html.contains("<img src=\"dance.gif\" alt=\"\" height=\"100\">"));
    assert!(html.contains("<video src=\"clip.mp4\" width=\"400\" height=\"300\" controls></video>"));
    assert!(html.contains("<video src=\"mute.mp4\" width=\"640\" height=\"480\"></video>"));
}

#[test]
fn test_fragments() {
    let slide = slide_with(|s| {
        s.fragment("plain", FragmentAnimation::FadeIn, None);
        s.fragment("red", FragmentAnimation::HighlightRed, Some(2));
    });
    let html = render(&slide);
    assert!(html.contains("<p class=\"fragment\">plain</p>"));
    assert!(html.contains("<p class=\"fragment highlight-red\" data-fragment-index=\"2\">red</p>"));
}

#[test]
fn test_columns() {
    let slide = slide_with(|s| {
        s.columns(|c| {
            c.column(Some("40%"), |col| {
                col.p("left 1");
                col.p("left 2");
            });
            c.column(None, |col| col.p("right"));
        });
    });
    let html = render(&slide);
    assert!(html.contains("<div class=\"r-hstack\">"));
    assert!(html.contains("<div style=\"width: 40%;\">"));
    assert!(html.contains("<p>left 1</p>"));
    assert!(html.contains("<p>left 2</p>"));
    assert!(html.contains("<p>right</p>"));
    assert_eq!(html.matches("<div").count(), 3);
}

#[test]
fn test_text_is_escaped() {
    let slide = slide_with(|s| {
        s.h2("<script>alert(1)</script>");
        s.attribute("data-note", "a\"b");
    });
    let html = render(&slide);
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("data-note=\"a&quot;b\""));
}

#[test]
fn test_vertical_group_nests_sections() {
    let deck = presentation(|p| {
        p.vertical_slides(|v| {
            v.slide(|s| s.h2("top"));
            v.slide(|s| s.h3("below"));
        });
    });
    let html = deck.generate_html();
    assert_eq!(html.matches("<section").count(), 3);
    let outer = html.find("<section>").unwrap();
    let top = html.find("top").unwrap();
    let below = html.find("below").unwrap();
    assert!(outer < top && top < below);
}

#[test]
fn test_config_replaced_wholesale() {
    let mut deck = PresentationBuilder::new();
    deck.config(|c| c.title = "Edited".to_string());
    assert_eq!(deck.configuration().title, "Edited");
    assert!(deck.configuration().math_enabled);

    deck.with_config(PresentationConfig {
        title: "Fresh".to_string(),
        math_enabled: false,
        ..PresentationConfig::default()
    });
    assert_eq!(deck.configuration().title, "Fresh");
    assert!(!deck.configuration().math_enabled);
}

#[test]
fn test_linear_gradient() {
    assert_eq!(
        linear_gradient(90, &["red", "blue", "green"]),
        "linear-gradient(90deg, red, blue, green)"
    );
}

#[test]
fn test_script_in_code_stays_inside_template() {
    let slide = slide_with(|s| s.html("<script>\n  go();\n</script>\n<p>after</p>"));
    let html = render(&slide);

    let open = "<script type=\"text/template\">";
    let start = html.find(open).expect("template region") + open.len();
    let end = start + html[start..].find("</script>").expect("template end");
    let body = &html[start..end];

    assert_eq!(body, "<script>\n  go();\n<\\/script>\n<p>after</p>");
    assert!(html[end..].starts_with("</script></code></pre>"));
    assert_eq!(html.matches("</script>").count(), 1);
}

#[test]
fn test_huge_padding_renders() {
    let deck = presentation(|p| {
        p.slide(|s| {
            s.fill_padded(u32::MAX);
            s.p("x");
            s.size_padded(0.5, u32::MAX);
            s.p("y");
        })
    });
    let html = deck.generate_html();
    assert!(html.contains("calc(100vw - 8589934590px)"));
    assert!(html.contains("calc(100vh * 0.5 - 8589934590px)"));
}

#[test]
fn test_language_shortcuts_accept_options() {
    let slide = slide_with(|s| {
        s.kt_with("val a = 1", CodeOptions::new().line_numbers(false));
        s.js_with("a()", CodeOptions::new().data_id("step"));
        s.html_with("b", CodeOptions::new().steps(&["1", "2"]));
        s.rs_with("c", CodeOptions::new().highlight(Lines::range(1..=2)));
    });
    let html = render(&slide);
    assert!(html.contains("<pre><code class=\"hljs kotlin\" data-trim=\"\">val a = 1</code></pre>"));
    assert!(html.contains("<pre data-id=\"step\"><code class=\"hljs javascript\" data-trim=\"\" data-line-numbers=\"\">"));
    assert!(html.contains("<code class=\"hljs html\" data-trim=\"\" data-line-numbers=\"1|2\">"));
    assert!(html.contains("<code class=\"hljs rust\" data-trim=\"\" data-line-numbers=\"|1-2\">"));
}
