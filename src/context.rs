//! Shared state context for the Maison Atelier UI.
//!
//! The only cross-component state is the persistent key-value store (drafts
//! and the submission audit record) and the toast notifier. Both are provided
//! at the app root and reached via `use_context`.

use std::sync::Arc;

use dioxus::prelude::*;
use maison_core::{FormController, RedbStore, SystemClock};

/// Shared store handle for context.
///
/// The redb store is internally synchronized, so components share one handle.
pub type SharedStore = Arc<RedbStore>;

/// The contact form controller as wired in production: redb-backed store,
/// real wall clock.
pub type SiteFormController = FormController<SharedStore, SystemClock>;

/// Hook to access the site state store from context.
///
/// `None` until the store has been opened on mount; components degrade to
/// draft-less operation while (or if) that never happens.
pub fn use_store() -> Signal<Option<SharedStore>> {
    use_context::<Signal<Option<SharedStore>>>()
}
