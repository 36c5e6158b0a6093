//! Transient toast notifications.
//!
//! The model is deliberately queue-less: every `push` appends another live
//! toast, each with its own removal deadline (the UI sleeps
//! [`TOAST_DURATION`] then dismisses by id). No cap, no dedup, no
//! coalescing; overlapping toasts simply stack.

use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Toast flavor, which picks the styling and the log prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Uppercase prefix used in the diagnostic log line.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
        }
    }

    /// CSS class for the toast element.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

/// A single live toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// The set of currently visible toasts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id, for later dismissal.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let message = message.into();
        tracing::info!("{}: {}", kind.label(), message);

        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message, kind });
        id
    }

    /// Remove the toast with `id`. Dismissing twice is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_monotonic_ids() {
        let mut center = NotificationCenter::new();
        let a = center.push("first", NotificationKind::Success);
        let b = center.push("second", NotificationKind::Error);
        assert!(b > a);
        assert_eq!(center.toasts().len(), 2);
    }

    #[test]
    fn overlapping_toasts_stack_without_dedup() {
        let mut center = NotificationCenter::new();
        center.push("same", NotificationKind::Error);
        center.push("same", NotificationKind::Error);
        assert_eq!(center.toasts().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_given_toast() {
        let mut center = NotificationCenter::new();
        let a = center.push("keep", NotificationKind::Success);
        let b = center.push("drop", NotificationKind::Error);

        center.dismiss(b);
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.toasts()[0].id, a);

        // Double dismissal is harmless
        center.dismiss(b);
        assert_eq!(center.toasts().len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut center = NotificationCenter::new();
        let a = center.push("one", NotificationKind::Success);
        center.dismiss(a);
        let b = center.push("two", NotificationKind::Success);
        assert!(b > a);
    }
}
