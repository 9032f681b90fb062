//! # UI Components
//!
//! Reusable Dioxus components for the SiteDesk pages.
//!
//! - **DataTable**: Rows of a collection with single-row highlight
//! - **Inputs**: Form input components (text, textarea, select, field input)
//! - **Dialogs**: Add/edit forms, delete confirmation and notices
//!
//! ## Component Hierarchy
//!
//! ```text
//! EntityTablePage
//! ├── DataTable
//! ├── FormDialog (add / edit)
//! │   └── FieldInput (multiple)
//! ├── ConfirmDeleteDialog
//! └── NoticeDialog (error / success)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod data_table;
pub mod dialogs;
pub mod inputs;

// ============================================================================
// Re-exports
// ============================================================================

pub use data_table::DataTable;
pub use dialogs::{ConfirmDeleteDialog, FormDialog, ModalFrame, NoticeDialog};
pub use inputs::{FieldInput, Select, SelectOption, TextArea, TextInput};
