//! # Confirm Delete Dialog Component
//!
//! Shows the configured summary of the selected row before it is deleted.

use dioxus::prelude::*;

use super::ModalFrame;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// `(label, value)` pairs describing the row
    pub summary: Vec<(String, String)>,

    pub on_confirm: EventHandler<()>,

    pub on_cancel: EventHandler<()>,
}

/// Confirmation dialog for deleting the selected row
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut is_deleting = use_signal(|| false);
    let deleting = *is_deleting.read();
    let on_confirm = props.on_confirm;
    let on_cancel = props.on_cancel;

    rsx! {
        ModalFrame {
            title: "Delete".to_string(),
            class: Some("modal-danger".to_string()),
            on_close: move |_| on_cancel.call(()),

            div {
                class: "modal-body",

                div {
                    class: "delete-warning",
                    span { "⚠️" }
                    p { "This record will be deleted permanently." }
                }

                if !props.summary.is_empty() {
                    dl {
                        class: "delete-summary",
                        for (label, value) in props.summary.iter() {
                            dt { key: "{label}", "{label}" }
                            dd { "{value}" }
                        }
                    }
                }

                div {
                    class: "modal-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| {
                            is_deleting.set(true);
                            on_confirm.call(());
                        },
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
