//! Contact form submission flow.
//!
//! Per attempt the controller moves `Idle -> Validating -> (Rejected |
//! Submitting -> Settled)`. Validating is synchronous inside [`FormController::begin`];
//! the gap between `begin` and [`FormController::settle`] is the simulated
//! network round trip, which the UI schedules with a fixed [`SUBMIT_DELAY`].
//! There is no real endpoint: settlement just logs the field dump and writes
//! the audit record.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::draft::DraftStore;
use crate::error::SiteError;
use crate::storage::KeyValueStore;
use crate::validation::{validate_submission, ValidationError};

/// Simulated network latency between begin and settle.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Storage key for the write-only submission audit record.
pub const LAST_SUBMISSION_KEY: &str = "lastSubmission";

/// Toast shown when settlement succeeds.
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We will respond within 24-48 hours.";

/// Toast shown when settlement fails.
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// Submit-button label while a submission is in flight.
pub const PENDING_LABEL: &str = "Sending...";

/// Where the controller currently is between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Raw field values as read off the form (untrimmed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Snapshot captured at submit time and persisted under
/// [`LAST_SUBMISSION_KEY`]. Serialized field names match the historical JSON
/// shape (`userAgent`, not `user_agent`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

/// Client identification string recorded with each submission.
pub fn client_user_agent() -> String {
    format!(
        "maison-desktop/{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Drives a single contact form: validation, the simulated submission, and
/// the post-settlement bookkeeping (draft clearing, audit record).
pub struct FormController<S: KeyValueStore + Clone, C: Clock> {
    store: S,
    drafts: DraftStore<S>,
    clock: C,
    phase: FormPhase,
}

impl<S: KeyValueStore + Clone, C: Clock> FormController<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        let drafts = DraftStore::new(store.clone());
        Self {
            store,
            drafts,
            clock,
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    /// Validate the attempt and, on success, enter `Submitting`.
    ///
    /// Values are trimmed here; rules run in order and the first failure
    /// wins. On rejection the phase is untouched, so the submit control never
    /// changed state.
    pub fn begin(&mut self, fields: &FieldValues) -> Result<SubmissionRecord, ValidationError> {
        let name = fields.name.trim();
        let company = fields.company.trim();
        let email = fields.email.trim();
        let phone = fields.phone.trim();
        let message = fields.message.trim();

        validate_submission(name, company, email, message)?;

        self.phase = FormPhase::Submitting;
        Ok(SubmissionRecord {
            name: name.to_string(),
            company: company.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
            timestamp: self.clock.timestamp(),
            user_agent: client_user_agent(),
        })
    }

    /// Settle an in-flight submission.
    ///
    /// Always returns the controller to `Idle` first, even if the audit write
    /// fails: a failed settlement must never leave the form stuck in
    /// `Submitting`. On success the field dump is logged, all draft keys are
    /// removed, and the record lands under [`LAST_SUBMISSION_KEY`].
    pub fn settle(&mut self, record: &SubmissionRecord) -> Result<(), SiteError> {
        self.phase = FormPhase::Idle;

        tracing::info!(
            name = %record.name,
            company = %record.company,
            email = %record.email,
            phone = %record.phone,
            message = %record.message,
            submitted_at = %record.timestamp,
            "form submission settled"
        );

        self.drafts.clear_all()?;

        let json = serde_json::to_string(record)
            .map_err(|e| SiteError::Serialization(e.to_string()))?;
        self.store.set(LAST_SUBMISSION_KEY, &json)?;
        Ok(())
    }
}
