//! Page Components for SiteDesk
//!
//! Each page is one screen of the application.
//!
//! ## Available Pages
//!
//! - **LoginPage**: Session check and sign-in
//! - **EntityTablePage**: Generic table page for every catalog collection
//! - **TimeTrackerPage**: Work-time table with start/end of day
//! - **IntakePage**: Public application form
//!

pub mod intake;
pub mod login;
pub mod table_page;
pub mod time_tracker;

// Re-export page components for convenience
pub use intake::IntakePage;
pub use login::LoginPage;
pub use table_page::{EntityTablePage, TableView};
pub use time_tracker::TimeTrackerPage;
