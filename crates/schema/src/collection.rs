//! Collection specs
//!
//! A `CollectionSpec` holds everything the generic table controller needs
//! to run one page: where to fetch and mutate, how to render rows, which
//! forms to show and which reference lists to preload.

use crate::column::Column;
use crate::field::FormField;
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use sitedesk_core::{DeskResult, Record, RecordId, Validatable};

// ============================================================================
// Endpoints
// ============================================================================

/// Endpoint paths of one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Collection path, e.g. `/api/materials/`; also the create path
    pub collection: String,

    /// List path when it differs from the collection path
    #[serde(default)]
    pub list: Option<String>,

    /// Fixed update path when updates are not addressed by id
    #[serde(default)]
    pub update: Option<String>,
}

impl Endpoints {
    /// Endpoints following the `<collection>/` + `<collection>/<id>/` convention
    pub fn rest(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            list: None,
            update: None,
        }
    }

    /// Use a different list path
    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.list = Some(list.into());
        self
    }

    /// Use a fixed update path
    pub fn with_update(mut self, update: impl Into<String>) -> Self {
        self.update = Some(update.into());
        self
    }

    /// Path fetched by `load`
    pub fn list_path(&self) -> &str {
        self.list.as_deref().unwrap_or(&self.collection)
    }

    /// Path a new record is POSTed to
    pub fn create_path(&self) -> &str {
        &self.collection
    }

    /// `<collection><id>/`
    pub fn item_path(&self, id: &RecordId) -> String {
        format!("{}{}/", self.collection, id)
    }

    /// Path an edit is PUT to
    pub fn update_path(&self, id: &RecordId) -> String {
        match &self.update {
            Some(path) => path.clone(),
            None => self.item_path(id),
        }
    }

    /// Path a DELETE is sent to
    pub fn delete_path(&self, id: &RecordId) -> String {
        self.item_path(id)
    }

    /// Every configured path, for validation
    pub fn all_paths(&self) -> Vec<&str> {
        let mut paths = vec![self.collection.as_str()];
        paths.extend(self.list.as_deref());
        paths.extend(self.update.as_deref());
        paths
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Which mutations a page offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Capabilities {
    /// List only
    pub fn read_only() -> Self {
        Self::default()
    }

    /// Add, edit and delete
    pub fn crud() -> Self {
        Self {
            add: true,
            edit: true,
            delete: true,
        }
    }

    /// Whether the page can mutate anything
    pub fn is_read_only(&self) -> bool {
        !(self.add || self.edit || self.delete)
    }
}

// ============================================================================
// CollectionSpec
// ============================================================================

/// Full description of one table page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSpec {
    /// Catalog name (`materials`, `job-titles`, ...)
    pub name: String,

    /// Page title
    pub title: String,

    /// Noun used in "Please select ... from the list"
    pub item_noun: String,

    /// Endpoint paths
    pub endpoints: Endpoints,

    /// Offered mutations
    pub capabilities: Capabilities,

    /// Table columns, in display order
    pub columns: Vec<Column>,

    /// Add dialog fields
    #[serde(default)]
    pub add_form: Vec<FormField>,

    /// Edit dialog fields
    #[serde(default)]
    pub edit_form: Vec<FormField>,

    /// Columns summarised in the delete confirmation
    #[serde(default)]
    pub delete_summary: Vec<String>,

    /// Collections fetched at page init to fill dropdowns
    #[serde(default)]
    pub references: Vec<String>,

    /// Add-form fields cleared after a successful create
    #[serde(default)]
    pub reset_after_add: Vec<String>,
}

impl CollectionSpec {
    /// Create a read-only spec with the given columns
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        endpoints: Endpoints,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            item_noun: "a row".to_string(),
            endpoints,
            capabilities: Capabilities::read_only(),
            columns,
            add_form: Vec::new(),
            edit_form: Vec::new(),
            delete_summary: Vec::new(),
            references: Vec::new(),
            reset_after_add: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the noun used in selection warnings
    pub fn with_item_noun(mut self, noun: impl Into<String>) -> Self {
        self.item_noun = noun.into();
        self
    }

    /// Offer an add dialog; `reset` lists fields cleared after success
    pub fn with_add_form(mut self, fields: Vec<FormField>, reset: &[&str]) -> Self {
        self.capabilities.add = true;
        self.add_form = fields;
        self.reset_after_add = reset.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Offer an edit dialog
    pub fn with_edit_form(mut self, fields: Vec<FormField>) -> Self {
        self.capabilities.edit = true;
        self.edit_form = fields;
        self
    }

    /// Offer deletion, summarising the given columns in the confirmation
    pub fn with_delete(mut self, summary: &[&str]) -> Self {
        self.capabilities.delete = true;
        self.delete_summary = summary.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Preload these collections for dropdowns
    pub fn with_references(mut self, references: &[&str]) -> Self {
        self.references = references.iter().map(|s| s.to_string()).collect();
        self
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Find a column by key
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Index of a column by key
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Find an add-form field by key
    pub fn add_field(&self, key: &str) -> Option<&FormField> {
        self.add_form.iter().find(|f| f.key == key)
    }

    /// Find an edit-form field by key
    pub fn edit_field(&self, key: &str) -> Option<&FormField> {
        self.edit_form.iter().find(|f| f.key == key)
    }

    /// Project one record into its row of cell strings
    pub fn render_row(&self, record: &Record) -> Vec<String> {
        self.columns.iter().map(|c| c.project(record)).collect()
    }

    /// Whether any dropdown needs preloading
    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }
}

impl Validatable for CollectionSpec {
    fn validate(&self) -> DeskResult<()> {
        Validator::with_default_rules().validate_result(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::WidgetType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn materials() -> CollectionSpec {
        CollectionSpec::new(
            "materials",
            "Materials",
            Endpoints::rest("/api/materials/"),
            vec![
                Column::new("id", "ID"),
                Column::new("name", "Name"),
                Column::new("amount", "Amount"),
            ],
        )
        .with_item_noun("a material")
        .with_add_form(
            vec![
                FormField::text("name", "Name"),
                FormField::text("amount", "Amount").with_widget(WidgetType::Number),
            ],
            &["name"],
        )
        .with_delete(&["name"])
    }

    #[test]
    fn test_rest_endpoints() {
        let ep = Endpoints::rest("/api/materials/");
        let id = RecordId::from("4");
        assert_eq!(ep.list_path(), "/api/materials/");
        assert_eq!(ep.create_path(), "/api/materials/");
        assert_eq!(ep.update_path(&id), "/api/materials/4/");
        assert_eq!(ep.delete_path(&id), "/api/materials/4/");
    }

    #[test]
    fn test_overridden_endpoints() {
        let ep = Endpoints::rest("/api/wtt/")
            .with_list("/api/wtt/listWTT/")
            .with_update("/api/wtt/updateWTT/");
        assert_eq!(ep.list_path(), "/api/wtt/listWTT/");
        assert_eq!(ep.update_path(&RecordId::from("9")), "/api/wtt/updateWTT/");
        assert_eq!(ep.all_paths().len(), 3);
    }

    #[test]
    fn test_builder_sets_capabilities() {
        let spec = materials();
        assert!(spec.capabilities.add);
        assert!(!spec.capabilities.edit);
        assert!(spec.capabilities.delete);
        assert_eq!(spec.reset_after_add, vec!["name".to_string()]);
        assert!(!spec.has_references());
    }

    #[test]
    fn test_render_row() {
        let spec = materials();
        let record = json!({"id": 1, "name": "Cement", "amount": "50.00"})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(spec.render_row(&record), vec!["1", "Cement", "50.00"]);
    }

    #[test]
    fn test_lookups() {
        let spec = materials();
        assert_eq!(spec.column_index("amount"), Some(2));
        assert!(spec.column("missing").is_none());
        assert!(spec.add_field("amount").is_some());
        assert!(spec.edit_field("amount").is_none());
    }

    #[test]
    fn test_spec_is_valid() {
        assert!(materials().is_valid());
    }

    #[test]
    fn test_read_only_capabilities() {
        assert!(Capabilities::read_only().is_read_only());
        assert!(!Capabilities::crud().is_read_only());
    }
}
