//! # Input Components
//!
//! Form inputs used by the add/edit dialogs, the login screen and the
//! intake form:
//! - **TextInput**: Single-line input (text, password, number, time...)
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection
//! - **FieldInput**: Renders a `FormField` with the widget it declares
//!

use dioxus::prelude::*;
use sitedesk_schema::{FormField, WidgetType};

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_input_class(false, props.disabled, &Some("textarea".to_string()));

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value is its label (reference dropdowns)
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(false, props.disabled, &Some("select".to_string()));

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Field Input Component
// ============================================================================

/// Properties for FieldInput component
#[derive(Props, Clone, PartialEq)]
pub struct FieldInputProps {
    /// Field definition
    pub field: FormField,

    /// Current value
    pub value: String,

    /// Option labels for reference dropdowns
    #[props(default)]
    pub options: Vec<String>,

    /// Change handler, called with `(key, value)`
    pub on_change: EventHandler<(String, String)>,
}

/// Input for one form field, picked by widget type
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let key = props.field.key.clone();
    let on_change = props.on_change;
    let handler = move |value: String| on_change.call((key.clone(), value));

    match props.field.widget {
        WidgetType::Select => {
            let options = select_options(&props.options, &props.value);
            rsx! {
                Select {
                    value: props.value.clone(),
                    options: options,
                    label: Some(props.field.label.clone()),
                    placeholder: props.field.placeholder.clone(),
                    on_change: handler,
                }
            }
        }
        WidgetType::TextArea => rsx! {
            TextArea {
                value: props.value.clone(),
                label: Some(props.field.label.clone()),
                placeholder: props.field.placeholder.clone(),
                on_change: handler,
            }
        },
        widget => rsx! {
            TextInput {
                value: props.value.clone(),
                label: Some(props.field.label.clone()),
                placeholder: props.field.placeholder.clone(),
                input_type: widget.html_input_type().to_string(),
                on_change: handler,
            }
        },
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build CSS class string for inputs
fn build_input_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec!["input"];

    if has_error {
        classes.push("input-invalid");
    }

    if disabled {
        classes.push("input-disabled");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

/// Dropdown options from reference labels
///
/// A prefilled value that the reference list no longer contains is kept as
/// an extra option so the dialog does not silently change it.
fn select_options(labels: &[String], current: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = labels.iter().map(SelectOption::labelled).collect();
    if !current.is_empty() && !labels.iter().any(|l| l == current) {
        options.push(SelectOption::labelled(current));
    }
    options
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false, &None);
        assert_eq!(class, "input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false, &None);
        assert!(class.contains("input-invalid"));
    }

    #[test]
    fn test_build_input_class_disabled_with_extra() {
        let class = build_input_class(false, true, &Some("select".to_string()));
        assert_eq!(class, "input input-disabled select");
    }

    #[test]
    fn test_select_option_labelled() {
        let opt = SelectOption::labelled("Warehouse");
        assert_eq!(opt.value, "Warehouse");
        assert_eq!(opt.label, "Warehouse");
    }

    #[test]
    fn test_select_options_keep_current_value() {
        let labels = vec!["Warehouse".to_string(), "Office".to_string()];
        assert_eq!(select_options(&labels, "Office").len(), 2);
        assert_eq!(select_options(&labels, "").len(), 2);

        let options = select_options(&labels, "Old site");
        assert_eq!(options.len(), 3);
        assert_eq!(options[2].value, "Old site");
    }
}
