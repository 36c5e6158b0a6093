//! The Maison Atelier page.
//!
//! One scrollable shell holding every section. The shell owns the scroll
//! state: each scroll event re-measures section tops and the current offset
//! in the webview, then the spy arithmetic picks the active nav link and the
//! scroll-to-top visibility.

use dioxus::document;
use dioxus::prelude::*;
use maison_core::{active_section, scroll_top_visible, Section};

use crate::components::{ContactForm, FadeInImage, HoverCard, NavBar, ScrollTopButton};

/// Reads `[scrollTop, [[id, offsetTop], ...]]` off the page shell.
///
/// Tops are re-measured on every event, same as reading `offsetTop` live:
/// image loads shifting the layout are picked up for free.
const SCROLL_STATE_JS: &str = r#"
const shell = document.getElementById('page');
const sections = Array.from(shell.querySelectorAll('section[id]')).map((s) => [s.id, s.offsetTop]);
return [shell.scrollTop, sections];
"#;

fn parse_scroll_state(value: &serde_json::Value) -> Option<(f64, Vec<Section>)> {
    let outer = value.as_array()?;
    let offset = outer.first()?.as_f64()?;
    let sections = outer
        .get(1)?
        .as_array()?
        .iter()
        .filter_map(|item| {
            let pair = item.as_array()?;
            let id = pair.first()?.as_str()?;
            let top = pair.get(1)?.as_f64()?;
            Some(Section::new(id, top))
        })
        .collect();
    Some((offset, sections))
}

/// Smooth-scroll the shell to a section by id. Unknown ids are a no-op.
fn scroll_to_section(id: &str) {
    let js = format!(
        "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    );
    let _ = document::eval(&js);
}

fn scroll_to_top() {
    let _ = document::eval(
        "document.getElementById('page').scrollTo({ top: 0, behavior: 'smooth' });",
    );
}

/// The single page: hero, services, portfolio, contact
#[component]
pub fn Home() -> Element {
    let mut scroll_offset = use_signal(|| 0.0f64);
    let mut active = use_signal(|| None::<String>);

    let on_scroll = move |_| {
        spawn(async move {
            match document::eval(SCROLL_STATE_JS).await {
                Ok(value) => {
                    let Some((offset, sections)) = parse_scroll_state(&value) else {
                        return;
                    };
                    scroll_offset.set(offset);
                    active.set(active_section(&sections, offset).map(str::to_string));
                }
                Err(e) => {
                    // Spy and button degrade silently; the page still scrolls
                    tracing::warn!("scroll state eval failed: {:?}", e);
                }
            }
        });
    };

    rsx! {
        div { id: "page", class: "page-shell", onscroll: on_scroll,
            NavBar {
                active: active(),
                on_navigate: move |id: String| scroll_to_section(&id),
            }

            main {
                section { id: "home", class: "hero",
                    h2 { class: "hero-title", "Clothing cut for one body: yours" }
                    p { class: "hero-tagline",
                        "An independent atelier for made-to-measure garments, "
                        "seasonal capsule collections, and quiet luxury."
                    }
                    a {
                        href: "#contact",
                        class: "cta",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            scroll_to_section("contact");
                        },
                        "Book a Consultation"
                    }
                }

                section { id: "services", class: "services",
                    h2 { class: "section-title", "Services" }
                    div { class: "services-grid",
                        HoverCard { class: "service-card",
                            h3 { "Bespoke Tailoring" }
                            p {
                                "Pattern drafted from scratch, two fittings, "
                                "hand-finished seams. Eight weeks from first "
                                "measurement to final press."
                            }
                        }
                        HoverCard { class: "service-card",
                            h3 { "Collection Development" }
                            p {
                                "Small-batch capsule collections for boutiques: "
                                "moodboard to graded patterns to a production-ready "
                                "sample set."
                            }
                        }
                        HoverCard { class: "service-card",
                            h3 { "Wardrobe Consulting" }
                            p {
                                "A working wardrobe audit - what to keep, what to "
                                "alter, what is missing - with a sourcing plan for "
                                "the gaps."
                            }
                        }
                    }
                }

                section { id: "portfolio", class: "portfolio",
                    h2 { class: "section-title", "Selected Work" }
                    div { class: "portfolio-grid",
                        HoverCard { class: "portfolio-item",
                            FadeInImage {
                                src: "assets/look-01.jpg",
                                alt: "Charcoal double-breasted suit, autumn capsule",
                            }
                            p { class: "caption", "Autumn capsule \u{00b7} charcoal wool" }
                        }
                        HoverCard { class: "portfolio-item",
                            FadeInImage {
                                src: "assets/look-02.jpg",
                                alt: "Raw silk evening dress with hand-rolled hem",
                            }
                            p { class: "caption", "Raw silk evening line" }
                        }
                        HoverCard { class: "portfolio-item",
                            FadeInImage {
                                src: "assets/look-03.jpg",
                                alt: "Linen atelier workwear set",
                            }
                            p { class: "caption", "Atelier workwear in linen" }
                        }
                    }
                }

                section { id: "contact", class: "contact",
                    h2 { class: "section-title", "Get in Touch" }
                    p { class: "contact-lead",
                        "Tell us about the garment you have in mind. "
                        "We respond to every inquiry within 24-48 hours."
                    }
                    ContactForm {}
                }
            }

            footer { class: "footer",
                p { "Maison Atelier \u{00b7} by appointment only" }
            }

            ScrollTopButton {
                visible: scroll_top_visible(scroll_offset()),
                on_click: move |_| scroll_to_top(),
            }
        }
    }
}
