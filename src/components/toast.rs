//! Toast Notification Host
//!
//! Renders the live toast stack and owns the one-time registration of the
//! notification keyframes. Components get a [`Notifier`] from context and
//! call [`Notifier::show`]; each toast removes itself after the fixed
//! display duration.

use dioxus::prelude::*;
use maison_core::{NotificationCenter, NotificationKind, TOAST_DURATION};

/// Entrance/exit keyframes plus the small-screen rule for toasts.
///
/// Rendered by the single [`ToastHost`] mount, so registration happens at
/// most once per page lifetime.
const NOTIFICATION_STYLES: &str = r#"
@keyframes slideInNotification {
  from {
    opacity: 0;
    transform: translateX(400px);
  }
  to {
    opacity: 1;
    transform: translateX(0);
  }
}

@keyframes slideOutNotification {
  from {
    opacity: 1;
    transform: translateX(0);
  }
  to {
    opacity: 0;
    transform: translateX(400px);
  }
}

@media (max-width: 768px) {
  .notification {
    right: 10px !important;
    left: 10px !important;
    max-width: none !important;
  }
}
"#;

/// Handle for showing toasts from any component.
#[derive(Clone, Copy)]
pub struct Notifier {
    center: Signal<NotificationCenter>,
}

impl Notifier {
    pub fn new(center: Signal<NotificationCenter>) -> Self {
        Self { center }
    }

    /// Show a toast; it dismisses itself after [`TOAST_DURATION`].
    ///
    /// Overlapping toasts stack; there is no cap and no dedup.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let mut center = self.center;
        let id = center.write().push(message, kind);
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            center.write().dismiss(id);
        });
    }

    fn center(&self) -> Signal<NotificationCenter> {
        self.center
    }
}

/// Hook to access the toast notifier from context.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Fixed-position toast stack, mounted once at the app root.
#[component]
pub fn ToastHost() -> Element {
    let notifier = use_notifier();
    let toasts = notifier.center()().toasts().to_vec();

    rsx! {
        style { {NOTIFICATION_STYLES} }
        div { class: "notification-layer",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "{toast.kind.css_class()}",
                    "{toast.message}"
                }
            }
        }
    }
}
