//! Validation rules for collection specs
//!
//! Errors make a spec unusable (a prefill pointing at a missing column,
//! a malformed path). Warnings flag specs that work but carry a known
//! defect, such as resetting an add-form field that does not exist.

use crate::catalog::Catalog;
use crate::collection::CollectionSpec;
use sitedesk_core::{DeskError, DeskResult};
use std::collections::HashSet;

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of a validation operation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// List of errors (empty if valid)
    pub errors: Vec<ValidationError>,

    /// List of warnings (non-fatal issues)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the result
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Convert to DeskResult (fails if any errors)
    pub fn to_result(self, collection: &str) -> DeskResult<()> {
        if self.valid {
            Ok(())
        } else {
            let msg = self
                .errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join("; ");
            Err(DeskError::spec(collection, msg))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling
    pub code: ValidationErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Path to the problematic element (e.g., "materials.edit_form.amount")
    pub path: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path to the error
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error codes for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    EmptyName,
    InvalidPath,
    NoColumns,
    DuplicateColumn,
    MissingIdColumn,
    DuplicateFormField,
    EmptyForm,
    UnknownPrefillColumn,
    UnregisteredReference,
    UnknownSummaryColumn,
    DuplicateCollection,
    UnknownReferenceCollection,
}

// ============================================================================
// ValidationWarning
// ============================================================================

/// A validation warning (non-fatal issue)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning code
    pub code: ValidationWarningCode,

    /// Human-readable warning message
    pub message: String,

    /// Path to the element
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Create a new warning
    pub fn new(code: ValidationWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] Warning: {}", path, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    /// A reset-after-add entry names a field the add form does not have
    ResetFieldMissing,
    /// A reference is preloaded but no field uses it
    UnusedReference,
    /// Delete confirmation shows nothing
    EmptyDeleteSummary,
}

// ============================================================================
// ValidationRule Trait
// ============================================================================

/// Trait for validation rules
pub trait ValidationRule {
    /// Get the rule name
    fn name(&self) -> &'static str;

    /// Validate a collection spec and return the result
    fn validate(&self, spec: &CollectionSpec) -> ValidationResult;
}

// ============================================================================
// Validator
// ============================================================================

/// Spec validator that runs multiple validation rules
#[derive(Default)]
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a validator with default rules
    pub fn with_default_rules() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(IdentityRule));
        validator.add_rule(Box::new(ColumnsRule));
        validator.add_rule(Box::new(FormsRule));
        validator.add_rule(Box::new(ResetFieldsRule));
        validator.add_rule(Box::new(DeleteSummaryRule));
        validator
    }

    /// Add a validation rule
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Validate a spec with all rules
    pub fn validate(&self, spec: &CollectionSpec) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for rule in &self.rules {
            result.merge(rule.validate(spec));
        }
        result
    }

    /// Validate and return Result
    pub fn validate_result(&self, spec: &CollectionSpec) -> DeskResult<()> {
        self.validate(spec).to_result(&spec.name)
    }

    /// Validate every spec of a catalog plus cross-collection references
    pub fn validate_catalog(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let mut seen = HashSet::new();

        for spec in catalog.iter() {
            if !seen.insert(spec.name.as_str()) {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::DuplicateCollection,
                        format!("Collection '{}' is defined twice", spec.name),
                    )
                    .with_path(spec.name.clone()),
                );
            }

            for reference in &spec.references {
                if catalog.get(reference).is_err() {
                    result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::UnknownReferenceCollection,
                            format!("Reference '{}' is not in the catalog", reference),
                        )
                        .with_path(format!("{}.references", spec.name)),
                    );
                }
            }

            result.merge(self.validate(spec));
        }

        result
    }
}

// ============================================================================
// Built-in Validation Rules
// ============================================================================

/// Name and endpoint paths
struct IdentityRule;

impl ValidationRule for IdentityRule {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn validate(&self, spec: &CollectionSpec) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if spec.name.trim().is_empty() {
            result.add_error(ValidationError::new(
                ValidationErrorCode::EmptyName,
                "Collection name cannot be empty",
            ));
        }

        for path in spec.endpoints.all_paths() {
            if !path.starts_with('/') || !path.ends_with('/') {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::InvalidPath,
                        format!("Endpoint '{}' must start and end with '/'", path),
                    )
                    .with_path(format!("{}.endpoints", spec.name)),
                );
            }
        }

        result
    }
}

/// Columns exist, are unique, and include `id` when rows can be mutated
struct ColumnsRule;

impl ValidationRule for ColumnsRule {
    fn name(&self) -> &'static str {
        "columns"
    }

    fn validate(&self, spec: &CollectionSpec) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if spec.columns.is_empty() {
            result.add_error(ValidationError::new(
                ValidationErrorCode::NoColumns,
                format!("'{}' has no columns", spec.name),
            ));
            return result;
        }

        let mut seen = HashSet::new();
        for column in &spec.columns {
            if !seen.insert(column.key.as_str()) {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::DuplicateColumn,
                        format!("Column '{}' appears twice", column.key),
                    )
                    .with_path(format!("{}.columns", spec.name)),
                );
            }
        }

        let mutates_rows = spec.capabilities.edit || spec.capabilities.delete;
        if mutates_rows && spec.column("id").is_none() {
            result.add_error(ValidationError::new(
                ValidationErrorCode::MissingIdColumn,
                format!("'{}' edits or deletes rows but has no 'id' column", spec.name),
            ));
        }

        result
    }
}

/// Form fields are unique, prefills and dropdowns are wired up
struct FormsRule;

impl FormsRule {
    fn check_form(
        spec: &CollectionSpec,
        form_name: &str,
        fields: &[crate::field::FormField],
        enabled: bool,
        result: &mut ValidationResult,
    ) {
        let path = format!("{}.{}", spec.name, form_name);

        if enabled && fields.is_empty() {
            result.add_error(
                ValidationError::new(
                    ValidationErrorCode::EmptyForm,
                    format!("{} is enabled but has no fields", form_name),
                )
                .with_path(path.clone()),
            );
        }

        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field.key.as_str()) {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::DuplicateFormField,
                        format!("Field '{}' appears twice", field.key),
                    )
                    .with_path(path.clone()),
                );
            }

            if let Some(column) = &field.prefill {
                if spec.column(column).is_none() {
                    result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::UnknownPrefillColumn,
                            format!(
                                "Field '{}' is prefilled from unknown column '{}'",
                                field.key, column
                            ),
                        )
                        .with_path(path.clone()),
                    );
                }
            }

            if let Some(reference) = &field.reference {
                if !spec.references.contains(reference) {
                    result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::UnregisteredReference,
                            format!(
                                "Field '{}' uses '{}' which is not preloaded",
                                field.key, reference
                            ),
                        )
                        .with_path(path.clone()),
                    );
                }
            }
        }
    }
}

impl ValidationRule for FormsRule {
    fn name(&self) -> &'static str {
        "forms"
    }

    fn validate(&self, spec: &CollectionSpec) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::check_form(
            spec,
            "add_form",
            &spec.add_form,
            spec.capabilities.add,
            &mut result,
        );
        Self::check_form(
            spec,
            "edit_form",
            &spec.edit_form,
            spec.capabilities.edit,
            &mut result,
        );

        for reference in &spec.references {
            let used = spec
                .add_form
                .iter()
                .chain(spec.edit_form.iter())
                .any(|f| f.reference.as_deref() == Some(reference.as_str()));
            if !used {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::UnusedReference,
                        format!("Reference '{}' is preloaded but never shown", reference),
                    )
                    .with_path(format!("{}.references", spec.name)),
                );
            }
        }

        result
    }
}

/// Reset-after-add entries must name add-form fields
///
/// A missing field is only a warning: resetting it is a no-op at runtime.
struct ResetFieldsRule;

impl ValidationRule for ResetFieldsRule {
    fn name(&self) -> &'static str {
        "reset_fields"
    }

    fn validate(&self, spec: &CollectionSpec) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for key in &spec.reset_after_add {
            if spec.add_field(key).is_none() {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::ResetFieldMissing,
                        format!("Reset field '{}' is not part of the add form", key),
                    )
                    .with_path(format!("{}.reset_after_add", spec.name)),
                );
            }
        }
        result
    }
}

/// Delete confirmation summarises existing columns
struct DeleteSummaryRule;

impl ValidationRule for DeleteSummaryRule {
    fn name(&self) -> &'static str {
        "delete_summary"
    }

    fn validate(&self, spec: &CollectionSpec) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if !spec.capabilities.delete {
            return result;
        }

        if spec.delete_summary.is_empty() {
            result.add_warning(
                ValidationWarning::new(
                    ValidationWarningCode::EmptyDeleteSummary,
                    "Delete confirmation shows no details",
                )
                .with_path(format!("{}.delete_summary", spec.name)),
            );
        }

        for key in &spec.delete_summary {
            if spec.column(key).is_none() {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::UnknownSummaryColumn,
                        format!("Delete summary column '{}' does not exist", key),
                    )
                    .with_path(format!("{}.delete_summary", spec.name)),
                );
            }
        }
        result
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Endpoints;
    use crate::column::Column;
    use crate::field::FormField;
    use sitedesk_core::Validatable;

    fn base() -> CollectionSpec {
        CollectionSpec::new(
            "roles",
            "Roles",
            Endpoints::rest("/api/roles/"),
            vec![Column::new("id", "ID"), Column::new("name", "Name")],
        )
    }

    #[test]
    fn test_read_only_spec_is_valid() {
        let result = Validator::with_default_rules().validate(&base());
        assert!(result.valid);
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_invalid_path() {
        let mut spec = base();
        spec.endpoints = Endpoints::rest("api/roles");
        let result = Validator::with_default_rules().validate(&spec);
        assert!(!result.valid);
        assert_eq!(result.errors[0].code, ValidationErrorCode::InvalidPath);
    }

    #[test]
    fn test_missing_id_column() {
        let spec = CollectionSpec::new(
            "roles",
            "Roles",
            Endpoints::rest("/api/roles/"),
            vec![Column::new("name", "Name")],
        )
        .with_delete(&["name"]);
        let result = Validator::with_default_rules().validate(&spec);
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.code == ValidationErrorCode::MissingIdColumn)
        );
    }

    #[test]
    fn test_unknown_prefill_column() {
        let spec = base().with_edit_form(vec![FormField::text("title", "Title").prefilled()]);
        let result = Validator::with_default_rules().validate(&spec);
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.code == ValidationErrorCode::UnknownPrefillColumn)
        );
        assert!(!spec.is_valid());
    }

    #[test]
    fn test_unregistered_reference() {
        let spec = base().with_add_form(vec![FormField::select("role", "Role", "roles")], &[]);
        let result = Validator::with_default_rules().validate(&spec);
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.code == ValidationErrorCode::UnregisteredReference)
        );
    }

    #[test]
    fn test_missing_reset_field_is_a_warning() {
        let spec = base().with_add_form(vec![FormField::text("login", "Login")], &["name"]);
        let result = Validator::with_default_rules().validate(&spec);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(
            result.warnings[0].code,
            ValidationWarningCode::ResetFieldMissing
        );
        assert_eq!(
            result.warnings[0].to_string(),
            "[roles.reset_after_add] Warning: Reset field 'name' is not part of the add form"
        );
    }

    #[test]
    fn test_unknown_summary_column() {
        let spec = base().with_delete(&["description"]);
        let err = Validator::with_default_rules()
            .validate_result(&spec)
            .unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}
