//! Page state
//!
//! A `TableState` is everything one table page shows: rendered rows, the
//! selection, visible modals, form inputs and dropdown options. Controllers
//! never own it; callers pass it in, so a fresh page is a fresh state.

use crate::form::FormState;
use crate::modal::{ModalKind, ModalSet};
use sitedesk_core::{RecordId, StatusLevel};
use sitedesk_schema::CollectionSpec;
use std::collections::BTreeMap;

// ============================================================================
// Notice
// ============================================================================

/// Message shown in the error/success modal or status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: StatusLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }
}

// ============================================================================
// SelectedRow
// ============================================================================

/// Cell text of the row the user clicked, keyed by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedRow {
    cells: Vec<(String, String)>,
}

impl SelectedRow {
    /// Capture a rendered row; cell text is trimmed
    pub fn capture(spec: &CollectionSpec, row: &[String]) -> Self {
        Self {
            cells: spec
                .columns
                .iter()
                .zip(row)
                .map(|(column, cell)| (column.key.clone(), cell.trim().to_string()))
                .collect(),
        }
    }

    /// Captured text of a column
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Identifier taken from the `id` cell
    pub fn id(&self) -> RecordId {
        RecordId::new(self.get("id").unwrap_or_default())
    }
}

// ============================================================================
// TableState
// ============================================================================

/// State of one table page
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// Collection this page shows
    pub collection: String,

    /// Rendered rows, one string per column
    pub rows: Vec<Vec<String>>,

    /// Row currently highlighted; dropped when the table re-renders
    pub highlighted: Option<usize>,

    /// Captured selection; survives re-renders until the next click
    pub selected: Option<SelectedRow>,

    pub modals: ModalSet,
    pub add_form: FormState,
    pub edit_form: FormState,

    /// Dropdown option labels per reference collection
    pub options: BTreeMap<String, Vec<String>>,

    /// `(label, value)` pairs shown in the delete confirmation
    pub delete_summary: Vec<(String, String)>,

    /// Message for the error/success modal
    pub notice: Option<Notice>,

    /// Successful list loads since the page opened
    pub loads: usize,

    /// A saved change could not be followed by a reload
    pub stale: bool,
}

impl TableState {
    /// Fresh page state for a collection
    pub fn new(spec: &CollectionSpec) -> Self {
        Self {
            collection: spec.name.clone(),
            rows: Vec::new(),
            highlighted: None,
            selected: None,
            modals: ModalSet::new(),
            add_form: FormState::for_fields(&spec.add_form),
            edit_form: FormState::for_fields(&spec.edit_form),
            options: BTreeMap::new(),
            delete_summary: Vec::new(),
            notice: None,
            loads: 0,
            stale: false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Option labels loaded for a reference collection
    pub fn options_for(&self, reference: &str) -> &[String] {
        self.options
            .get(reference)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Show the error modal with a message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::error(message));
        self.modals.show(ModalKind::Error);
    }

    /// Show the success modal with a message
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::success(message));
        self.modals.show(ModalKind::Success);
    }

    /// Close every modal and forget the notice
    pub fn close_modals(&mut self) {
        self.modals.close_all();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedesk_schema::{Column, Endpoints, FormField};

    fn spec() -> CollectionSpec {
        CollectionSpec::new(
            "job-titles",
            "Job Titles",
            Endpoints::rest("/api/job-titles/"),
            vec![Column::new("id", "ID"), Column::new("name", "Name")],
        )
        .with_add_form(vec![FormField::text("name", "Name")], &["name"])
    }

    #[test]
    fn test_new_state() {
        let state = TableState::new(&spec());
        assert_eq!(state.collection, "job-titles");
        assert_eq!(state.row_count(), 0);
        assert!(!state.has_selection());
        assert_eq!(state.add_form.get("name"), Some(""));
        assert!(state.edit_form.is_empty());
        assert!(state.options_for("objects").is_empty());
        assert!(!state.stale);
    }

    #[test]
    fn test_capture_trims_cells() {
        let row = vec![" 3 ".to_string(), "Foreman ".to_string()];
        let selected = SelectedRow::capture(&spec(), &row);
        assert_eq!(selected.get("name"), Some("Foreman"));
        assert_eq!(selected.id().as_str(), "3");
        assert_eq!(selected.get("missing"), None);
    }

    #[test]
    fn test_notices() {
        let mut state = TableState::new(&spec());
        state.show_error("boom");
        assert!(state.modals.is_visible(ModalKind::Error));
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(StatusLevel::Error));

        state.close_modals();
        assert!(!state.modals.any_visible());
        assert!(state.notice.is_none());
    }
}
