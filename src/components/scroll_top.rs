//! Scroll-to-top button, shown once the page has scrolled past the
//! visibility threshold. Visibility is computed by the parent from the
//! current offset; this component only renders and reports clicks.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ScrollTopProps {
    /// Whether the button is currently shown
    pub visible: bool,
    /// Callback when the button is clicked
    pub on_click: EventHandler<()>,
}

/// Floating scroll-to-top control
#[component]
pub fn ScrollTopButton(props: ScrollTopProps) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if props.visible { "scroll-top show" } else { "scroll-top" },
            "aria-label": "Scroll to top",
            onclick: move |_| props.on_click.call(()),
            "\u{2191}"
        }
    }
}
