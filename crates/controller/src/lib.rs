//! # SiteDesk Controller
//!
//! Page flows shared by the desktop UI and the CLI.
//!
//! - **TableController**: the generic entity table (load, select, add, edit, delete)
//! - **TableState**: explicit page state handed to every operation
//! - **AuthController**: session check, login, logout
//! - **TimeTrackerController**: work-time table plus start/end of day
//! - **IntakeController**: public application form
//!

pub mod auth;
pub mod form;
pub mod intake;
pub mod modal;
pub mod state;
pub mod table;
pub mod time_tracker;

pub use auth::{AuthController, LoginStatus, login_error_message};
pub use form::FormState;
pub use intake::{IntakeController, IntakeForm, IntakeOutcome};
pub use modal::{ModalKind, ModalSet};
pub use state::{Notice, SelectedRow, TableState};
pub use table::{ERROR_MESSAGE, STALE_MESSAGE, SUCCESS_MESSAGE, TableController};
pub use time_tracker::{DayMark, TimeTrackerController};
