// ABOUTME: Sample deck showing off the reveal-slides DSL
// ABOUTME: Built by the `generate` command of the binary

use crate::config::Transition;
use crate::content::FragmentAnimation;
use crate::highlight::Lines;
use crate::presentation::{presentation, PresentationBuilder};

const HELLO_RUST: &str = r#"
fn main() {
    println!("Hello, World!");

    let sum: i32 = (1..=10).sum();
    println!("Sum of 1 to 10 is {sum}");

    let items = ["Rust", "Kotlin", "Python"];
    for item in items {
        println!("Item: {item}");
    }

    // A small struct with a method
    struct Person { name: String, age: u32 }
    impl Person {
        fn greet(&self) {
            println!("Hello, my name is {} and I'm {} years old.",
                self.name, self.age);
        }
    }

    let person = Person { name: "Alice".into(), age: 30 };
    person.greet();
}
"#;

const MAXWELL: &str = r"\begin{align}
\nabla \times \vec{\mathbf{B}} -\, \frac1c\, \frac{\partial\vec{\mathbf{E}}}{\partial t} &= \frac{4\pi}{c}\vec{\mathbf{j}} \\
\nabla \cdot \vec{\mathbf{E}} &= 4 \pi \rho \\
\nabla \times \vec{\mathbf{E}}\, +\, \frac1c\, \frac{\partial\vec{\mathbf{B}}}{\partial t} &= \vec{\mathbf{0}} \\
\nabla \cdot \vec{\mathbf{B}} &= 0
\end{align}";

/// The demo deck.
pub fn demo_presentation() -> PresentationBuilder {
    presentation(|p| {
        p.config(|c| {
            c.title = "RevealJS Rust DSL".to_string();
            c.description = "Type-safe presentation framework with JetBrains theme".to_string();
            c.author = "reveal-slides".to_string();
            c.transition = Transition::Fade;
            c.math_enabled = true;
        });

        p.slide(|s| {
            s.background("#000000");
            s.h1("RevealJS Rust DSL");
            s.h3("Type-Safe Presentation");
            s.p("Decks as plain Rust code");
            s.notes("Welcome. This deck demonstrates every feature of the builder.");
        });

        p.slide(|s| {
            s.background("#000000");
            s.h2("DSL Features");
            s.ul(|l| {
                l.item("Type-checked builder API");
                l.item("Code highlighting with line-by-line reveals");
                l.item("Mathematical typesetting with MathJax");
                l.item("Vertical sub-slides");
                l.item("Images, GIFs and video");
                l.item("Fragment animations and transitions");
                l.item("Column layouts and viewport sizing");
            });
        });

        p.slide(|s| {
            s.h2("Code Highlighting");
            s.code_highlighted(
                "rust",
                HELLO_RUST.trim(),
                (Lines::of(&[4]) & Lines::range(8..=10)) + Lines::of(&[15]) + Lines::range(19..=21),
            );
            s.notes("Highlight steps reveal the interesting lines one group at a time.");
        });

        p.slide(|s| {
            s.h2("Mathematical Text Support");
            s.p("Inline math example:");
            s.math("E = mc^2", false);
            s.p("Display math with complex formulas:");
            s.math(MAXWELL, true);
            s.notes("MathJax renders both inline and display formulas.");
        });

        p.slide(|s| {
            s.h2("Fragment Animations");
            s.p("Content appears step by step:");
            s.fragment("This content fades in", FragmentAnimation::FadeIn, Some(1));
            s.fragment("This content grows", FragmentAnimation::Grow, Some(2));
            s.fragment("This content shrinks", FragmentAnimation::Shrink, Some(3));
            s.fragment("This highlights in red", FragmentAnimation::HighlightRed, Some(4));
            s.fragment("This fades up from bottom", FragmentAnimation::FadeUp, Some(5));
        });

        p.slide(|s| {
            s.h2("Media Support");
            s.p("Video support:");
            s.video("https://static.slid.es/site/homepage/v1/homepage-video-editor.mp4");
            s.notes("Images, GIFs and videos accept custom dimensions.");
        });

        p.slide(|s| {
            s.h2("Advanced Layouts");
            s.columns(|c| {
                c.column(Some("50%"), |col| {
                    col.p("Left Column Content");
                    col.p("This demonstrates the column layout system.");
                });
                c.column(Some("50%"), |col| {
                    col.p("Right Column Content");
                    col.p("Columns can have custom widths.");
                });
            });
        });

        p.slide(|s| {
            s.h2("Markup in Code");
            s.size(0.8);
            s.html(r#"<div class="greeting">Hello</div>"#);
            s.notes("Sources containing markup are kept inert by the renderer.");
        });

        p.vertical_slides(|v| {
            v.slide(|s| {
                s.h2("Vertical Navigation");
                s.p("This is the main slide");
                s.p("Navigate down to see sub-slides");
            });
            v.slide(|s| {
                s.h3("Sub-slide 1");
                s.p("This is a vertical sub-slide");
                s.js("console.log('Vertical slide content');");
            });
            v.slide(|s| {
                s.h3("Sub-slide 2");
                s.math(r"\sum_{i=1}^{n} x_i = x_1 + x_2 + \cdots + x_n", true);
                s.p("Mathematical content in vertical slides");
            });
        });

        p.slide(|s| {
            s.background_gradient_angle(135, &["#3574F0", "#000000"]);
            s.transition(Transition::Zoom);
            s.h1("Thank You!");
            s.p("Built with Rust");
        });
    })
}
