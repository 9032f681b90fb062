//! Generic entity table controller
//!
//! One controller drives every table page. The `CollectionSpec` says where
//! to fetch and mutate and how to render; the `TableState` passed into each
//! operation holds what the page shows.
//!
//! Page lifecycle:
//!
//! - `init`: load dropdown options, then the list
//! - `select_row`: capture the clicked row's cell text
//! - `open_add` / `open_edit` / `open_delete`: reveal a dialog
//! - `submit_add` / `submit_edit` / `submit_delete`: send, then reload on success
//!
//! Failures are terminal for the attempted operation. Nothing is retried.

use crate::modal::ModalKind;
use crate::state::{Notice, SelectedRow, TableState};
use sitedesk_client::{ApiRequest, ApiResponse, Transport};
use sitedesk_core::{DeskError, DeskResult, Record, RecordId, option_label};
use sitedesk_schema::{Catalog, CollectionSpec, Validator};

/// Success modal text
pub const SUCCESS_MESSAGE: &str = "Changes saved";

/// Error modal text; server detail is only logged
pub const ERROR_MESSAGE: &str = "The request failed. Please try again.";

/// Shown when a saved change could not be followed by a reload
pub const STALE_MESSAGE: &str = "The list could not be refreshed";

/// Which mutation a submit performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Add,
    Edit,
    Delete,
}

impl Mutation {
    fn name(&self) -> &'static str {
        match self {
            Mutation::Add => "add",
            Mutation::Edit => "edit",
            Mutation::Delete => "delete",
        }
    }

    /// Create needs exactly 201, the others any 2xx
    fn accepts(&self, response: &ApiResponse) -> bool {
        match self {
            Mutation::Add => response.is_created(),
            Mutation::Edit | Mutation::Delete => response.is_success(),
        }
    }
}

// ============================================================================
// TableController
// ============================================================================

/// Controller for one collection's table page
#[derive(Debug, Clone)]
pub struct TableController<T> {
    spec: CollectionSpec,
    /// `(reference name, list path)` for every dropdown source
    references: Vec<(String, String)>,
    transport: T,
}

impl<T: Transport> TableController<T> {
    /// Build a controller for a catalog collection
    ///
    /// Fails when the collection is unknown, one of its references is not
    /// in the catalog, or its spec has validation errors. Warnings are
    /// logged and otherwise ignored.
    pub fn from_catalog(catalog: &Catalog, collection: &str, transport: T) -> DeskResult<Self> {
        let spec = catalog.get(collection)?.clone();

        let report = Validator::with_default_rules().validate(&spec);
        for warning in &report.warnings {
            tracing::warn!("{}", warning);
        }
        report.to_result(&spec.name)?;

        let references = spec
            .references
            .iter()
            .map(|name| {
                catalog
                    .get(name)
                    .map(|r| (name.clone(), r.endpoints.list_path().to_string()))
            })
            .collect::<DeskResult<Vec<_>>>()?;

        Ok(Self {
            spec,
            references,
            transport,
        })
    }

    pub fn spec(&self) -> &CollectionSpec {
        &self.spec
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fresh state for this page
    pub fn new_state(&self) -> TableState {
        TableState::new(&self.spec)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load dropdown options, then the list
    ///
    /// The list is loaded even when options fail; the first error is returned.
    pub async fn init(&self, state: &mut TableState) -> DeskResult<()> {
        let references = self.load_references(state).await;
        let list = self.load(state).await;
        references.and(list)
    }

    /// Fetch every reference collection into the dropdown options
    pub async fn load_references(&self, state: &mut TableState) -> DeskResult<()> {
        for (name, path) in &self.references {
            match self.fetch_records(path).await {
                Ok(records) => {
                    let labels: Vec<String> = records.iter().filter_map(option_label).collect();
                    tracing::debug!("Loaded {} options from {}", labels.len(), name);
                    state.options.insert(name.clone(), labels);
                }
                Err(e) => {
                    tracing::error!("Failed to load options for {}: {}", self.spec.name, e);
                    state.show_error(ERROR_MESSAGE);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Fetch the list and re-render the table
    ///
    /// On failure the error modal is shown and the current rows are kept.
    pub async fn load(&self, state: &mut TableState) -> DeskResult<()> {
        match self.fetch_records(self.spec.endpoints.list_path()).await {
            Ok(records) => {
                self.render(state, &records);
                state.loads += 1;
                state.stale = false;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", self.spec.name, e);
                state.show_error(ERROR_MESSAGE);
                Err(e)
            }
        }
    }

    /// Reload after a change the backend already accepted
    ///
    /// A failed reload does not undo the change: the success modal stays,
    /// the rows are kept and the page is marked stale.
    pub async fn refresh_after_save(&self, state: &mut TableState) {
        match self.fetch_records(self.spec.endpoints.list_path()).await {
            Ok(records) => {
                self.render(state, &records);
                state.loads += 1;
                state.stale = false;
            }
            Err(e) => {
                tracing::warn!("Saved to {} but reload failed: {}", self.spec.name, e);
                state.stale = true;
            }
        }
    }

    /// Replace all rows with one row per record
    pub fn render(&self, state: &mut TableState, records: &[Record]) {
        state.rows = records.iter().map(|r| self.spec.render_row(r)).collect();
        state.highlighted = None;
    }

    async fn fetch_records(&self, path: &str) -> DeskResult<Vec<Record>> {
        let response = self.transport.send(ApiRequest::get(path)).await?;
        if !response.is_success() {
            return Err(response.into_error(path));
        }
        response.json(path)
    }

    // ========================================================================
    // Selection and dialogs
    // ========================================================================

    /// Mark one row selected and capture its cell text
    pub fn select_row(&self, state: &mut TableState, index: usize) -> DeskResult<()> {
        let row = state
            .rows
            .get(index)
            .ok_or_else(|| DeskError::internal(format!("row {} is out of range", index)))?;
        state.selected = Some(SelectedRow::capture(&self.spec, row));
        state.highlighted = Some(index);
        Ok(())
    }

    /// Set an add-form input
    pub fn set_add_field(&self, state: &mut TableState, key: &str, value: &str) -> DeskResult<()> {
        if state.add_form.set(key, value) {
            Ok(())
        } else {
            Err(self.unknown_field(key))
        }
    }

    /// Set an edit-form input
    pub fn set_edit_field(&self, state: &mut TableState, key: &str, value: &str) -> DeskResult<()> {
        if state.edit_form.set(key, value) {
            Ok(())
        } else {
            Err(self.unknown_field(key))
        }
    }

    pub fn open_add(&self, state: &mut TableState) -> DeskResult<()> {
        self.require(Mutation::Add)?;
        state.modals.show(ModalKind::Add);
        Ok(())
    }

    /// Reveal the edit dialog prefilled from the selected row
    pub fn open_edit(&self, state: &mut TableState) -> DeskResult<()> {
        self.require(Mutation::Edit)?;
        let selected = self.require_selection(state)?;

        for field in &self.spec.edit_form {
            if let Some(column) = &field.prefill {
                let value = selected.get(column).unwrap_or_default();
                state.edit_form.set(&field.key, value);
            }
        }
        state.modals.show(ModalKind::Edit);
        Ok(())
    }

    /// Reveal the delete confirmation for the selected row
    pub fn open_delete(&self, state: &mut TableState) -> DeskResult<()> {
        self.require(Mutation::Delete)?;
        let selected = self.require_selection(state)?;

        state.delete_summary = self
            .spec
            .delete_summary
            .iter()
            .map(|key| {
                let label = self
                    .spec
                    .column(key)
                    .map(|c| c.label.clone())
                    .unwrap_or_else(|| key.clone());
                (label, selected.get(key).unwrap_or_default().to_string())
            })
            .collect();
        state.modals.show(ModalKind::Delete);
        Ok(())
    }

    // ========================================================================
    // Submits
    // ========================================================================

    /// POST the add form; on 201 reset the configured fields and reload
    pub async fn submit_add(&self, state: &mut TableState) -> DeskResult<()> {
        self.require(Mutation::Add)?;
        let request = ApiRequest::post(
            self.spec.endpoints.create_path(),
            state.add_form.to_payload(true),
        );
        self.mutate(state, Mutation::Add, request).await
    }

    /// PUT the edit form for the selected row
    pub async fn submit_edit(&self, state: &mut TableState) -> DeskResult<()> {
        self.require(Mutation::Edit)?;
        let id = self.require_selection(state)?.id();
        let request = ApiRequest::put(
            self.spec.endpoints.update_path(&id),
            state.edit_form.to_payload(false),
        );
        self.mutate(state, Mutation::Edit, request).await
    }

    /// DELETE the selected row
    pub async fn submit_delete(&self, state: &mut TableState) -> DeskResult<()> {
        self.require(Mutation::Delete)?;
        let id = self.require_selection(state)?.id();
        self.delete_by_id(state, &id).await
    }

    /// DELETE a row by identifier, without a prior selection
    pub async fn delete_by_id(&self, state: &mut TableState, id: &RecordId) -> DeskResult<()> {
        self.require(Mutation::Delete)?;
        let request = ApiRequest::delete(self.spec.endpoints.delete_path(id));
        self.mutate(state, Mutation::Delete, request).await
    }

    /// Send a mutation and settle the page
    ///
    /// Success closes every modal, shows the success modal and reloads once.
    /// Failure closes every modal and shows the error modal without reloading.
    /// The result reflects the mutation only, never the reload.
    async fn mutate(
        &self,
        state: &mut TableState,
        mutation: Mutation,
        request: ApiRequest,
    ) -> DeskResult<()> {
        let target = request.path.clone();
        let outcome = match self.transport.send(request).await {
            Ok(response) if mutation.accepts(&response) => Ok(()),
            Ok(response) => {
                tracing::error!(
                    "{} on {} rejected with {}: {}",
                    mutation.name(),
                    self.spec.name,
                    response.status,
                    response.body
                );
                Err(response.into_error(&target))
            }
            Err(e) => {
                tracing::error!("{} on {} failed: {}", mutation.name(), self.spec.name, e);
                Err(e)
            }
        };

        state.close_modals();
        if let Err(e) = outcome {
            state.show_error(ERROR_MESSAGE);
            return Err(e);
        }

        tracing::info!("{} on {} succeeded", mutation.name(), self.spec.name);
        state.show_success(SUCCESS_MESSAGE);
        if mutation == Mutation::Add {
            self.reset_add_form(state);
        }
        self.refresh_after_save(state).await;
        Ok(())
    }

    fn reset_add_form(&self, state: &mut TableState) {
        for key in &self.spec.reset_after_add {
            if !state.add_form.clear(key) {
                tracing::warn!(
                    "{} resets '{}' after add but its add form has no such field",
                    self.spec.name,
                    key
                );
            }
        }
    }

    // ========================================================================
    // Guards
    // ========================================================================

    fn require(&self, mutation: Mutation) -> DeskResult<()> {
        let caps = &self.spec.capabilities;
        let offered = match mutation {
            Mutation::Add => caps.add,
            Mutation::Edit => caps.edit,
            Mutation::Delete => caps.delete,
        };
        if offered {
            Ok(())
        } else {
            Err(DeskError::ActionUnavailable {
                collection: self.spec.name.clone(),
                action: mutation.name().to_string(),
            })
        }
    }

    fn require_selection(&self, state: &mut TableState) -> DeskResult<SelectedRow> {
        match &state.selected {
            Some(selected) => Ok(selected.clone()),
            None => {
                let err = DeskError::no_selection(&self.spec.item_noun);
                tracing::warn!("{}", err);
                state.notice = Some(Notice::warning(err.to_string()));
                Err(err)
            }
        }
    }

    fn unknown_field(&self, key: &str) -> DeskError {
        DeskError::UnknownField {
            collection: self.spec.name.clone(),
            field: key.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
