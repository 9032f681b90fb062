//! # Application Intake Page
//!
//! Public form for sending an application (name, phone, description). The
//! form is cleared only after the backend accepts it.

use dioxus::prelude::*;
use sitedesk_controller::{IntakeForm, Notice};

use crate::components::{NoticeDialog, TextArea, TextInput};
use crate::state::{self, APP_STATE, Page};

/// Public application form
#[component]
pub fn IntakePage() -> Element {
    let mut form = use_signal(IntakeForm::default);
    let mut is_sending = use_signal(|| false);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_sending.peek() {
            return;
        }
        is_sending.set(true);
        spawn(async move {
            let intake = match state::intake_controller() {
                Ok(intake) => intake,
                Err(e) => {
                    notice.set(Some(Notice::error(e.to_string())));
                    is_sending.set(false);
                    return;
                }
            };
            let mut current = form.peek().clone();
            let outcome = intake.submit(&mut current).await;
            form.set(current);
            notice.set(Some(Notice::new(outcome.level(), outcome.message())));
            is_sending.set(false);
        });
    };

    let values = form.read().clone();
    let sending = *is_sending.read();
    let logged_in = APP_STATE.read().is_logged_in();

    rsx! {
        div {
            class: "intake-page",

            form {
                class: "intake-card",
                onsubmit: on_submit,

                h1 { "📝 Submit an application" }

                TextInput {
                    value: values.full_name.clone(),
                    label: Some("Full name".to_string()),
                    on_change: move |v| form.write().full_name = v,
                }

                TextInput {
                    value: values.phone_number.clone(),
                    label: Some("Phone number".to_string()),
                    input_type: "tel".to_string(),
                    on_change: move |v| form.write().phone_number = v,
                }

                TextArea {
                    value: values.description.clone(),
                    label: Some("Description".to_string()),
                    rows: 6,
                    on_change: move |v| form.write().description = v,
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: sending,
                    if sending { "Sending..." } else { "Send application" }
                }

                if !logged_in {
                    button {
                        r#type: "button",
                        class: "btn btn-link",
                        onclick: move |_| APP_STATE.write().ui.navigate(Page::Login),
                        "Staff sign in"
                    }
                }
            }

            if let Some(message) = notice.read().clone() {
                NoticeDialog {
                    notice: message,
                    on_close: move |_| notice.set(None),
                }
            }
        }
    }
}
