//! Maison Atelier Site Core
//!
//! Headless behavior layer for the Maison Atelier marketing page: contact
//! form validation and submission, write-through draft persistence, scroll
//! state arithmetic, and toast notifications.
//!
//! ## Overview
//!
//! The desktop UI is a thin Dioxus layer over this crate. Everything with
//! observable rules lives here, behind two small ports:
//!
//! - [`KeyValueStore`] - persistent string key-value state (redb in
//!   production, in-memory in tests)
//! - [`Clock`] - the wall-clock timestamp recorded with each submission
//!
//! so the submit flow, the draft lifecycle, and the scroll spy tie-break are
//! all testable without a webview.
//!
//! ## Quick Start
//!
//! ```ignore
//! use maison_core::{FieldValues, FixedClock, FormController, MemoryStore};
//!
//! let mut form = FormController::new(MemoryStore::new(), FixedClock("now".into()));
//! let record = form.begin(&FieldValues {
//!     name: "Jo Smith".into(),
//!     company: "Acme Co".into(),
//!     email: "jo@acme.com".into(),
//!     phone: String::new(),
//!     message: "Please call me back soon".into(),
//! })?;
//! // ... after the simulated round trip ...
//! form.settle(&record)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clock;
pub mod draft;
pub mod error;
pub mod form;
pub mod notify;
pub mod scroll;
pub mod storage;
pub mod validation;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::DraftStore;
pub use error::SiteError;
pub use form::{
    client_user_agent, FieldValues, FormController, FormPhase, SubmissionRecord,
    FAILURE_MESSAGE, LAST_SUBMISSION_KEY, PENDING_LABEL, SUBMIT_DELAY, SUCCESS_MESSAGE,
};
pub use notify::{NotificationCenter, NotificationKind, Toast, TOAST_DURATION};
pub use scroll::{active_section, scroll_top_visible, Section, SCROLL_TOP_THRESHOLD, SPY_MARGIN};
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use validation::{
    marker_on_blur, marker_on_input, validate_email, validate_submission, Field, FieldMarker,
    ValidationError, COMPANY_MIN_LEN, MESSAGE_MIN_LEN, NAME_MIN_LEN,
};
