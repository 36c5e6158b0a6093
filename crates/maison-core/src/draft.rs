//! Draft persistence for the contact form.
//!
//! Every input event writes the field's current value straight through to the
//! store (no debounce), so the store and the live field never diverge by more
//! than one keystroke. Drafts are read back once at mount and removed when
//! the form is submitted.

use crate::error::SiteError;
use crate::storage::KeyValueStore;
use crate::validation::Field;

/// Write-through draft store over a [`KeyValueStore`], one key per field.
#[derive(Clone)]
pub struct DraftStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the saved draft for `field`, if any.
    ///
    /// A storage error degrades to "no draft": the form still renders, it
    /// just starts empty.
    pub fn hydrate(&self, field: Field) -> Option<String> {
        match self.store.get(field.storage_key()) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(field = field.storage_key(), error = %e, "draft hydrate failed");
                None
            }
        }
    }

    /// Persist the field's current value as entered (untrimmed).
    pub fn record(&self, field: Field, value: &str) -> Result<(), SiteError> {
        self.store.set(field.storage_key(), value)
    }

    /// Remove every per-field draft key.
    ///
    /// Runs on the raw submit event, before validation, so a rejected submit
    /// still drops the draft. That matches the page's long-standing behavior;
    /// whether it was ever intended is an open question, so it stays.
    pub fn clear_all(&self) -> Result<(), SiteError> {
        for field in Field::ALL {
            self.store.remove(field.storage_key())?;
        }
        Ok(())
    }
}
