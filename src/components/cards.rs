//! Card hover and image fade-in effects.

use dioxus::prelude::*;

// Inline transforms, applied on pointer enter/leave
const CARD_LIFT: &str = "transform: translateY(-8px) scale(1.02);";
const CARD_REST: &str = "transform: translateY(0) scale(1);";

/// Card wrapper with the lift-on-hover transform.
#[component]
pub fn HoverCard(class: String, children: Element) -> Element {
    let mut lifted = use_signal(|| false);

    rsx! {
        div {
            class: "{class}",
            style: if lifted() { CARD_LIFT } else { CARD_REST },
            onmouseenter: move |_| lifted.set(true),
            onmouseleave: move |_| lifted.set(false),
            {children}
        }
    }
}

/// Image that fades in when its data arrives.
///
/// Starts transparent and flips to full opacity on the load event; the CSS
/// transition does the fading. A cache hit fires load immediately, which is
/// the "already complete" case.
#[component]
pub fn FadeInImage(src: String, alt: String) -> Element {
    let mut loaded = use_signal(|| false);

    rsx! {
        img {
            class: "fade-img",
            src: "{src}",
            alt: "{alt}",
            style: if loaded() { "opacity: 1;" } else { "opacity: 0;" },
            onload: move |_| loaded.set(true),
        }
    }
}
