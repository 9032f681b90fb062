//! # Form Dialog Component
//!
//! Add and edit dialogs. The dialog only renders inputs and reports
//! changes; the page writes them into its `FormState` and submits through
//! the table controller.

use dioxus::prelude::*;
use sitedesk_controller::FormState;
use sitedesk_schema::FormField;
use std::collections::BTreeMap;

use super::ModalFrame;
use crate::components::inputs::FieldInput;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct FormDialogProps {
    /// Dialog title
    pub title: String,

    /// Fields in display order
    pub fields: Vec<FormField>,

    /// Current input values
    pub values: FormState,

    /// Dropdown labels per reference collection
    #[props(default)]
    pub options: BTreeMap<String, Vec<String>>,

    /// Submit button text
    #[props(default = "Save".to_string())]
    pub submit_label: String,

    /// Called with `(key, value)` on every input change
    pub on_change: EventHandler<(String, String)>,

    pub on_submit: EventHandler<()>,

    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Dialog with one input per form field
#[component]
pub fn FormDialog(props: FormDialogProps) -> Element {
    let on_submit = props.on_submit;
    let on_cancel = props.on_cancel;

    rsx! {
        ModalFrame {
            title: props.title.clone(),
            on_close: move |_| on_cancel.call(()),

            form {
                class: "modal-body form-dialog",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },

                for field in props.fields.iter() {
                    FieldInput {
                        key: "{field.key}",
                        field: field.clone(),
                        value: props.values.get(&field.key).unwrap_or_default().to_string(),
                        options: field_options(field, &props.options),
                        on_change: props.on_change,
                    }
                }

                div {
                    class: "modal-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "{props.submit_label}"
                    }
                }
            }
        }
    }
}

/// Dropdown labels for a field, empty for plain inputs
fn field_options(field: &FormField, options: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    field
        .reference
        .as_ref()
        .and_then(|reference| options.get(reference))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_options() {
        let mut options = BTreeMap::new();
        options.insert("objects".to_string(), vec!["Warehouse".to_string()]);

        let select = FormField::select("object", "Object", "objects");
        assert_eq!(field_options(&select, &options), vec!["Warehouse".to_string()]);

        let unloaded = FormField::select("role", "Role", "roles");
        assert!(field_options(&unloaded, &options).is_empty());

        let text = FormField::text("name", "Name");
        assert!(field_options(&text, &options).is_empty());
    }
}
