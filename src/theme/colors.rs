//! Colors applied from Rust rather than the stylesheet.
//!
//! The field border cue is set as an inline style by the form, so the two
//! states live here next to the code that applies them.

/// Border color for a field flagged by validation
pub const BORDER_INVALID: &str = "#e74c3c";

/// Resting border color for form fields
pub const BORDER_NEUTRAL: &str = "rgba(102, 126, 234, 0.3)";
