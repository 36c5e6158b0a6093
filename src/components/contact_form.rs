//! Contact Form Component
//!
//! Wires the form controller to the page: draft restore on mount,
//! write-through draft saves on every keystroke, blur/input border cues, and
//! the simulated submission round trip with the pending button state.

use dioxus::prelude::*;
use maison_core::{
    marker_on_blur, marker_on_input, Field, FieldMarker, FieldValues, NotificationKind,
    SystemClock, FAILURE_MESSAGE, PENDING_LABEL, SUBMIT_DELAY, SUCCESS_MESSAGE,
};

use crate::components::use_notifier;
use crate::context::{use_store, SiteFormController};
use crate::theme::{BORDER_INVALID, BORDER_NEUTRAL};

const SUBMIT_LABEL: &str = "Send Inquiry";

fn border_style(marker: FieldMarker) -> String {
    match marker {
        FieldMarker::Invalid => format!("border-color: {};", BORDER_INVALID),
        FieldMarker::Neutral => format!("border-color: {};", BORDER_NEUTRAL),
    }
}

/// Persist a field's current value. A failed write costs the visitor one
/// keystroke of draft, nothing more, so it only warns.
fn record_draft(controller: Signal<Option<SiteFormController>>, field: Field, value: &str) {
    if let Some(ctl) = controller.read().as_ref() {
        if let Err(e) = ctl.drafts().record(field, value) {
            tracing::warn!(field = field.storage_key(), error = %e, "draft write failed");
        }
    }
}

/// Contact form with validation, drafts, and simulated submission
#[component]
pub fn ContactForm() -> Element {
    let store = use_store();
    let notifier = use_notifier();

    let mut controller: Signal<Option<SiteFormController>> = use_signal(|| None);

    let mut name = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut name_marker = use_signal(FieldMarker::default);
    let mut company_marker = use_signal(FieldMarker::default);
    let mut email_marker = use_signal(FieldMarker::default);
    let mut message_marker = use_signal(FieldMarker::default);

    let mut submitting = use_signal(|| false);

    // Build the controller and restore drafts once the store is ready
    use_effect(move || {
        if controller.read().is_some() {
            return;
        }
        if let Some(shared) = store() {
            let ctl = SiteFormController::new(shared, SystemClock);
            let drafts = ctl.drafts();
            if let Some(v) = drafts.hydrate(Field::Name) {
                name.set(v);
            }
            if let Some(v) = drafts.hydrate(Field::Company) {
                company.set(v);
            }
            if let Some(v) = drafts.hydrate(Field::Email) {
                email.set(v);
            }
            if let Some(v) = drafts.hydrate(Field::Phone) {
                phone.set(v);
            }
            if let Some(v) = drafts.hydrate(Field::Message) {
                message.set(v);
            }
            controller.set(Some(ctl));
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let values = FieldValues {
            name: name(),
            company: company(),
            email: email(),
            phone: phone(),
            message: message(),
        };

        let mut guard = controller.write();
        let Some(ctl) = guard.as_mut() else {
            notifier.show("Form fields not found!", NotificationKind::Error);
            return;
        };

        // The raw submit event drops the draft before validation runs, so a
        // rejected attempt loses it too. Long-standing page behavior, kept.
        if let Err(e) = ctl.drafts().clear_all() {
            tracing::warn!(error = %e, "draft clear failed");
        }

        let begun = ctl.begin(&values);
        drop(guard);

        match begun {
            Err(rule) => notifier.show(rule.to_string(), NotificationKind::Error),
            Ok(record) => {
                submitting.set(true);
                spawn(async move {
                    // Simulated network round trip
                    tokio::time::sleep(SUBMIT_DELAY).await;

                    let settled = controller.write().as_mut().map(|ctl| ctl.settle(&record));
                    match settled {
                        Some(Ok(())) => {
                            notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
                            name.set(String::new());
                            company.set(String::new());
                            email.set(String::new());
                            phone.set(String::new());
                            message.set(String::new());
                            name_marker.set(FieldMarker::Neutral);
                            company_marker.set(FieldMarker::Neutral);
                            email_marker.set(FieldMarker::Neutral);
                            message_marker.set(FieldMarker::Neutral);
                        }
                        Some(Err(e)) => {
                            tracing::error!("Error during submission: {}", e);
                            notifier.show(FAILURE_MESSAGE, NotificationKind::Error);
                        }
                        None => {
                            notifier.show(FAILURE_MESSAGE, NotificationKind::Error);
                        }
                    }
                    // Restored even when settlement failed
                    submitting.set(false);
                });
            }
        }
    };

    rsx! {
        form { class: "contact-form", onsubmit: handle_submit,
            div { class: "form-row",
                div { class: "form-group",
                    label { r#for: "name", "Name *" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        value: "{name}",
                        style: "{border_style(name_marker())}",
                        oninput: move |evt| {
                            let value = evt.value();
                            if let Some(m) = marker_on_input(Field::Name, &value) {
                                name_marker.set(m);
                            }
                            record_draft(controller, Field::Name, &value);
                            name.set(value);
                        },
                        onblur: move |_| name_marker.set(marker_on_blur(Field::Name, &name())),
                    }
                }

                div { class: "form-group",
                    label { r#for: "company", "Company *" }
                    input {
                        id: "company",
                        name: "company",
                        r#type: "text",
                        value: "{company}",
                        style: "{border_style(company_marker())}",
                        oninput: move |evt| {
                            let value = evt.value();
                            if let Some(m) = marker_on_input(Field::Company, &value) {
                                company_marker.set(m);
                            }
                            record_draft(controller, Field::Company, &value);
                            company.set(value);
                        },
                        onblur: move |_| {
                            company_marker.set(marker_on_blur(Field::Company, &company()))
                        },
                    }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { r#for: "email", "Email *" }
                    input {
                        id: "email",
                        name: "email",
                        // Plain text input: the form's own email rule is
                        // authoritative, not the webview's
                        r#type: "text",
                        value: "{email}",
                        style: "{border_style(email_marker())}",
                        oninput: move |evt| {
                            let value = evt.value();
                            if let Some(m) = marker_on_input(Field::Email, &value) {
                                email_marker.set(m);
                            }
                            record_draft(controller, Field::Email, &value);
                            email.set(value);
                        },
                        onblur: move |_| email_marker.set(marker_on_blur(Field::Email, &email())),
                    }
                }

                div { class: "form-group",
                    label { r#for: "Mobile", "Phone" }
                    input {
                        // Historical element id, also the draft storage key
                        id: "Mobile",
                        name: "Mobile",
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |evt| {
                            let value = evt.value();
                            record_draft(controller, Field::Phone, &value);
                            phone.set(value);
                        },
                    }
                }
            }

            div { class: "form-group",
                label { r#for: "message", "Message *" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "6",
                    value: "{message}",
                    style: "{border_style(message_marker())}",
                    oninput: move |evt| {
                        let value = evt.value();
                        if let Some(m) = marker_on_input(Field::Message, &value) {
                            message_marker.set(m);
                        }
                        record_draft(controller, Field::Message, &value);
                        message.set(value);
                    },
                    onblur: move |_| {
                        message_marker.set(marker_on_blur(Field::Message, &message()))
                    },
                }
            }

            button {
                r#type: "submit",
                class: "submit-btn",
                disabled: submitting(),
                if submitting() { {PENDING_LABEL} } else { {SUBMIT_LABEL} }
            }
        }
    }
}
