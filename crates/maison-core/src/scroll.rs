//! Scroll-driven UI state.
//!
//! Two independent computations, both re-run on every scroll event:
//! the scroll-to-top button threshold and the scroll spy that picks which
//! nav link to highlight. Pure arithmetic over measured section tops, so the
//! UI layer only has to feed in offsets.

/// Offset past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// How far above a section's top the spy starts counting it as reached.
pub const SPY_MARGIN: f64 = 200.0;

/// A page section with an id, as measured in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Whether the scroll-to-top button is visible at `offset`.
pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// The section whose nav link should be highlighted, if any.
///
/// Scans sections in document order; every section with
/// `offset >= top - SPY_MARGIN` overwrites the previous candidate, so the
/// last match wins. That is "the closest section whose top has been scrolled
/// past". The arithmetic is signed: a section at top 0 qualifies at any
/// non-negative offset.
pub fn active_section(sections: &[Section], offset: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if offset >= section.top - SPY_MARGIN {
            current = Some(section.id.as_str());
        }
    }
    current
}
