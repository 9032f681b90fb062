//! # Login Page
//!
//! Checks the existing session when shown and signs in with login and
//! password. A rejected or failed login opens the error modal.

use dioxus::prelude::*;
use sitedesk_controller::{LoginStatus, Notice, login_error_message};

use crate::components::{NoticeDialog, TextInput};
use crate::state::{self, APP_STATE, Page};

/// Sign-in page
#[component]
pub fn LoginPage() -> Element {
    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error: Signal<Option<Notice>> = use_signal(|| None);

    // ── Session check ────────────────────────────────────────────────────
    use_hook(|| {
        spawn(async move {
            let auth = match state::auth_controller() {
                Ok(auth) => auth,
                Err(e) => {
                    error.set(Some(Notice::error(e.to_string())));
                    return;
                }
            };
            match auth.check_login().await {
                Ok(LoginStatus::LoggedIn) => APP_STATE.write().signed_in(),
                Ok(status) => {
                    tracing::debug!("Session check: {:?}", status);
                    APP_STATE.write().session = status;
                }
                Err(e) => tracing::warn!("Session check failed: {}", e),
            }
        });
    });

    let mut submit = move || {
        if *is_submitting.peek() {
            return;
        }
        is_submitting.set(true);
        let credentials = (login.peek().clone(), password.peek().clone());
        spawn(async move {
            let result = match state::auth_controller() {
                Ok(auth) => auth.login(&credentials.0, &credentials.1).await,
                Err(e) => Err(e),
            };
            is_submitting.set(false);
            match result {
                Ok(()) => {
                    password.set(String::new());
                    APP_STATE.write().signed_in();
                }
                Err(e) => error.set(Some(Notice::error(login_error_message(&e)))),
            }
        });
    };

    let submitting = *is_submitting.read();

    rsx! {
        div {
            class: "login-page",

            form {
                class: "login-card",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit();
                },

                h1 { "🔑 SiteDesk" }
                p { class: "login-subtitle", "Sign in to manage staff, materials and time" }

                TextInput {
                    value: login.read().clone(),
                    label: Some("Login".to_string()),
                    placeholder: Some("Login".to_string()),
                    on_change: move |v| login.set(v),
                }

                TextInput {
                    value: password.read().clone(),
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    on_change: move |v| password.set(v),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: submitting,
                    if submitting { "Signing in..." } else { "Sign in" }
                }

                button {
                    r#type: "button",
                    class: "btn btn-link",
                    onclick: move |_| APP_STATE.write().ui.navigate(Page::Intake),
                    "Submit an application without signing in"
                }
            }

            if let Some(notice) = error.read().clone() {
                NoticeDialog {
                    notice: notice,
                    on_close: move |_| error.set(None),
                }
            }
        }
    }
}
