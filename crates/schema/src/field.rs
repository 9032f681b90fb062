//! Form field definitions
//!
//! Each add or edit dialog is a list of `FormField`s. A field names the
//! payload key it is sent under, which need not match the column it is
//! prefilled from (applications send `type_name` but display `type`).

use serde::{Deserialize, Serialize};

// ============================================================================
// WidgetType
// ============================================================================

/// Widget types for form rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    /// Single-line text input
    #[default]
    Text,
    /// Multi-line text area
    TextArea,
    /// Numeric input
    Number,
    /// Email input
    Email,
    /// Phone number input
    Phone,
    /// Password input (masked)
    Password,
    /// Time of day
    Time,
    /// Dropdown filled from a reference collection
    Select,
}

impl WidgetType {
    /// Get the HTML input type attribute
    pub fn html_input_type(&self) -> &'static str {
        match self {
            WidgetType::Text | WidgetType::Select => "text",
            WidgetType::TextArea => "textarea",
            WidgetType::Number => "number",
            WidgetType::Email => "email",
            WidgetType::Phone => "tel",
            WidgetType::Password => "password",
            WidgetType::Time => "time",
        }
    }
}

// ============================================================================
// FormField
// ============================================================================

/// One input of an add or edit dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Key the value is sent under
    pub key: String,

    /// Label text
    pub label: String,

    /// Widget used to edit the value
    #[serde(default)]
    pub widget: WidgetType,

    /// Column of the selected row this field is prefilled from (edit forms)
    #[serde(default)]
    pub prefill: Option<String>,

    /// Collection whose option labels fill this field's dropdown
    #[serde(default)]
    pub reference: Option<String>,

    /// Placeholder text (also the empty option of a dropdown)
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a field with the given widget
    pub fn new(key: impl Into<String>, label: impl Into<String>, widget: WidgetType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            widget,
            prefill: None,
            reference: None,
            placeholder: None,
        }
    }

    /// Single-line text field
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, WidgetType::Text)
    }

    /// Dropdown filled from `reference`
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        let label = label.into();
        Self {
            placeholder: Some(label.clone()),
            reference: Some(reference.into()),
            ..Self::new(key, label, WidgetType::Select)
        }
    }

    /// Change the widget
    pub fn with_widget(mut self, widget: WidgetType) -> Self {
        self.widget = widget;
        self
    }

    /// Prefill from the selected row's column of the same key
    pub fn prefilled(mut self) -> Self {
        self.prefill = Some(self.key.clone());
        self
    }

    /// Prefill from a differently named column
    pub fn prefilled_from(mut self, column: impl Into<String>) -> Self {
        self.prefill = Some(column.into());
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Whether this field is a reference dropdown
    pub fn is_select(&self) -> bool {
        self.widget == WidgetType::Select
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field() {
        let field = FormField::text("name", "Name").prefilled();
        assert_eq!(field.key, "name");
        assert_eq!(field.prefill.as_deref(), Some("name"));
        assert!(!field.is_select());
        assert_eq!(field.widget.html_input_type(), "text");
    }

    #[test]
    fn test_select_field() {
        let field = FormField::select("type_name", "Type", "application-types")
            .prefilled_from("type");
        assert!(field.is_select());
        assert_eq!(field.reference.as_deref(), Some("application-types"));
        assert_eq!(field.prefill.as_deref(), Some("type"));
        assert_eq!(field.placeholder.as_deref(), Some("Type"));
    }

    #[test]
    fn test_widget_input_types() {
        assert_eq!(WidgetType::Password.html_input_type(), "password");
        assert_eq!(WidgetType::Number.html_input_type(), "number");
        assert_eq!(WidgetType::Time.html_input_type(), "time");
    }
}
