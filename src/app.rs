use std::sync::Arc;

use dioxus::prelude::*;
use maison_core::{NotificationCenter, RedbStore};

use crate::components::{Notifier, ToastHost};
use crate::context::SharedStore;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the site state store, and the toast notifier; the
/// whole site is one page, so there is no router.
#[component]
pub fn App() -> Element {
    let mut store: Signal<Option<SharedStore>> = use_signal(|| None);
    let center: Signal<NotificationCenter> = use_signal(NotificationCenter::new);
    let notifier = Notifier::new(center);

    // Provide shared state to all child components
    use_context_provider(|| store);
    use_context_provider(|| notifier);

    // Open the store on mount
    use_effect(move || {
        let path = crate::get_data_dir().join("site.redb");
        match RedbStore::new(&path) {
            Ok(opened) => {
                store.set(Some(Arc::new(opened)));
                tracing::info!("Site state store ready at {:?}", path);
            }
            Err(e) => {
                // Drafts and the audit trail are lost, the page still works
                tracing::error!("Failed to open site state store: {}", e);
            }
        }
    });

    // Page-load confirmation
    use_effect(|| {
        tracing::info!("Maison Atelier loaded successfully");
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
        ToastHost {}
    }
}
