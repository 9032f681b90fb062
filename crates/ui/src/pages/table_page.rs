//! # Entity Table Page
//!
//! One page component serves every catalog collection:
//!
//! - Loads dropdown options and the list when it mounts
//! - Highlights the clicked row and remembers its cells
//! - Opens add, edit and delete dialogs (when the collection offers them)
//! - Shows the error or success modal after each request
//!
//! The page state is a `TableState` held in a signal. Async handlers take
//! a copy, run the controller operation on it and write it back.

use dioxus::prelude::*;
use sitedesk_controller::{ModalKind, STALE_MESSAGE, TableState};
use sitedesk_core::StatusLevel;

use crate::components::{ConfirmDeleteDialog, DataTable, FormDialog, NoticeDialog};
use crate::state::{self, APP_STATE};

// ============================================================================
// Entity Table Page Component
// ============================================================================

/// Table page for one catalog collection
#[component]
pub fn EntityTablePage(collection: String) -> Element {
    let page: Signal<Option<TableState>> = use_signal(|| None);

    rsx! {
        TableView { collection: collection, page: page }
    }
}

// ============================================================================
// Table View Component
// ============================================================================

/// Properties for TableView component
#[derive(Props, Clone, PartialEq)]
pub struct TableViewProps {
    /// Catalog collection name
    pub collection: String,

    /// Page state, owned by the enclosing page
    pub page: Signal<Option<TableState>>,
}

/// Toolbar, table and dialogs of a collection page
#[component]
pub fn TableView(props: TableViewProps) -> Element {
    let mut page = props.page;
    let controller = use_hook(|| state::table_controller(&props.collection).map_err(|e| e.to_string()));

    // ── Initial load ─────────────────────────────────────────────────────
    use_hook({
        let controller = controller.clone();
        move || {
            if let Ok(controller) = controller {
                spawn(async move {
                    let mut fresh = controller.new_state();
                    page.set(Some(fresh.clone()));
                    if let Err(e) = controller.init(&mut fresh).await {
                        tracing::warn!("Initial load of {} failed: {}", controller.spec().name, e);
                    }
                    page.set(Some(fresh));
                });
            }
        }
    });

    let controller = match controller {
        Ok(controller) => controller,
        Err(message) => {
            return rsx! {
                div {
                    class: "page-error",
                    h2 { "Page unavailable" }
                    p { "{message}" }
                }
            };
        }
    };

    let Some(current) = page.read().clone() else {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    };

    let spec = controller.spec().clone();
    let caps = spec.capabilities;
    let title = spec.title.clone();
    let columns = spec.columns.clone();

    // ── Sync handlers ────────────────────────────────────────────────────
    let on_select = {
        let controller = controller.clone();
        move |index: usize| {
            update(page, |state| {
                if let Err(e) = controller.select_row(state, index) {
                    tracing::warn!("{}", e);
                }
            })
        }
    };

    let open = {
        let controller = controller.clone();
        move |kind: ModalKind| {
            let controller = controller.clone();
            move |_: MouseEvent| {
                update(page, |state| {
                    let result = match kind {
                        ModalKind::Add => controller.open_add(state),
                        ModalKind::Edit => controller.open_edit(state),
                        _ => controller.open_delete(state),
                    };
                    if let Err(e) = result {
                        if e.is_user_error() {
                            APP_STATE.write().ui.set_status(e.to_string(), StatusLevel::Warning);
                        } else {
                            tracing::warn!("{}", e);
                        }
                    }
                })
            }
        }
    };

    let on_add_change = {
        let controller = controller.clone();
        move |(key, value): (String, String)| {
            update(page, |state| {
                if let Err(e) = controller.set_add_field(state, &key, &value) {
                    tracing::warn!("{}", e);
                }
            })
        }
    };

    let on_edit_change = {
        let controller = controller.clone();
        move |(key, value): (String, String)| {
            update(page, |state| {
                if let Err(e) = controller.set_edit_field(state, &key, &value) {
                    tracing::warn!("{}", e);
                }
            })
        }
    };

    let hide = move |kind: ModalKind| move |_: ()| update(page, |state| state.modals.hide(kind));

    let close_notice = move |_: ()| update(page, |state| state.close_modals());

    // ── Async handlers ───────────────────────────────────────────────────
    let on_refresh = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move {
                let Some(mut state) = page.peek().clone() else {
                    return;
                };
                if let Err(e) = controller.load(&mut state).await {
                    tracing::warn!("Reload failed: {}", e);
                }
                page.set(Some(state));
            });
        }
    };

    let submit = {
        let controller = controller.clone();
        move |kind: ModalKind| {
            let controller = controller.clone();
            move |_: ()| {
                let controller = controller.clone();
                spawn(async move {
                    let Some(mut state) = page.peek().clone() else {
                        return;
                    };
                    let result = match kind {
                        ModalKind::Add => controller.submit_add(&mut state).await,
                        ModalKind::Edit => controller.submit_edit(&mut state).await,
                        _ => controller.submit_delete(&mut state).await,
                    };
                    if let Err(e) = result {
                        tracing::warn!("{} on {} failed: {}", kind.title(), controller.spec().name, e);
                    }
                    page.set(Some(state));
                });
            }
        }
    };

    let row_count = current.row_count();
    let selection = current
        .selected
        .as_ref()
        .map(|row| format!("Selected: {}", row.id().as_str()));

    rsx! {
        div {
            class: "table-page",

            // Page header
            div {
                class: "page-header",
                h1 { "{title}" }
                div {
                    class: "page-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: on_refresh,
                        "⟳ Refresh"
                    }
                    if caps.add {
                        button {
                            class: "btn btn-primary",
                            onclick: open(ModalKind::Add),
                            "＋ Add"
                        }
                    }
                    if caps.edit {
                        button {
                            class: "btn btn-secondary",
                            onclick: open(ModalKind::Edit),
                            "✎ Edit"
                        }
                    }
                    if caps.delete {
                        button {
                            class: "btn btn-danger",
                            onclick: open(ModalKind::Delete),
                            "🗑 Delete"
                        }
                    }
                }
            }

            DataTable {
                columns: columns,
                rows: current.rows.clone(),
                highlighted: current.highlighted,
                on_select: on_select,
            }

            div {
                class: "page-footer",
                span { "{row_count} rows" }
                if current.stale {
                    span { class: "status-warning", "{STALE_MESSAGE}" }
                }
                if let Some(selection) = selection {
                    span { "{selection}" }
                }
            }

            // Dialogs
            if current.modals.is_visible(ModalKind::Add) {
                FormDialog {
                    title: format!("Add to {}", spec.title),
                    fields: spec.add_form.clone(),
                    values: current.add_form.clone(),
                    options: current.options.clone(),
                    submit_label: "Add".to_string(),
                    on_change: on_add_change,
                    on_submit: submit(ModalKind::Add),
                    on_cancel: hide(ModalKind::Add),
                }
            }

            if current.modals.is_visible(ModalKind::Edit) {
                FormDialog {
                    title: format!("Edit {}", spec.title),
                    fields: spec.edit_form.clone(),
                    values: current.edit_form.clone(),
                    options: current.options.clone(),
                    on_change: on_edit_change,
                    on_submit: submit(ModalKind::Edit),
                    on_cancel: hide(ModalKind::Edit),
                }
            }

            if current.modals.is_visible(ModalKind::Delete) {
                ConfirmDeleteDialog {
                    summary: current.delete_summary.clone(),
                    on_confirm: submit(ModalKind::Delete),
                    on_cancel: hide(ModalKind::Delete),
                }
            }

            if let Some(notice) = current.notice.clone() {
                if current.modals.is_visible(ModalKind::Error) || current.modals.is_visible(ModalKind::Success) {
                    NoticeDialog { notice: notice, on_close: close_notice }
                }
            }
        }
    }
}

/// Apply a synchronous change to the page state
fn update(mut page: Signal<Option<TableState>>, change: impl FnOnce(&mut TableState)) {
    let mut guard = page.write();
    if let Some(state) = guard.as_mut() {
        change(state);
    }
}
