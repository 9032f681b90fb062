//! # Dialog Components
//!
//! The overlays every table page can show.
//!
//! ## Dialogs
//!
//! - **ModalFrame**: Backdrop and panel shared by all dialogs
//! - **FormDialog**: Add and edit forms built from `FormField`s
//! - **ConfirmDeleteDialog**: Delete confirmation with a summary of the row
//! - **NoticeDialog**: Error and success messages
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitedesk_ui::components::dialogs::NoticeDialog;
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         NoticeDialog { notice: Notice::success("Changes saved"), on_close: move |_| {} }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod form_dialog;
pub mod frame;
pub mod notice;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use form_dialog::FormDialog;
pub use frame::ModalFrame;
pub use notice::NoticeDialog;
