//! Navigation Bar Component
//!
//! Fixed header with the brand mark, the anchor links, and the hamburger
//! toggle that drives the mobile menu. The open state lives here and nowhere
//! else; it does not survive a relaunch.

use dioxus::prelude::*;

/// Anchor links in document order: (section id, label).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Section id the scroll spy currently considers active, if any
    pub active: Option<String>,
    /// Callback with the target section id when a nav link is clicked
    pub on_navigate: EventHandler<String>,
}

/// Navigation bar
///
/// - Hamburger click flips the menu open state, mirrored as an `active`
///   class on both the toggle and the menu
/// - Clicking outside the navigation (the backdrop) closes the menu
/// - Clicking any link closes the menu and hands the target section to the
///   parent for smooth scrolling; the default anchor jump is suppressed
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut open = use_signal(|| false);
    let on_navigate = props.on_navigate;

    rsx! {
        // Backdrop to close the menu when clicking outside the navbar
        if open() {
            div {
                class: "nav-backdrop",
                onclick: move |_| open.set(false),
            }
        }

        header { class: "navbar",
            div { class: "nav-inner",
                h1 { class: "brand", "Maison Atelier" }

                button {
                    r#type: "button",
                    class: if open() { "hamburger active" } else { "hamburger" },
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{open()}",
                    onclick: move |_| open.set(!open()),

                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                }

                nav { class: if open() { "nav-menu active" } else { "nav-menu" },
                    for (id, label) in NAV_LINKS {
                        a {
                            key: "{id}",
                            href: "#{id}",
                            class: if props.active.as_deref() == Some(id) { "nav-link active" } else { "nav-link" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                open.set(false);
                                on_navigate.call(id.to_string());
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
