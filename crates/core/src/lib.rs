//! # SiteDesk Core
//!
//! Core types, traits, and error handling for SiteDesk.
//!
//! This crate provides the foundational building blocks shared by the
//! schema, client, controller and front-end crates:
//!
//! - **Types**: Backend records, record identifiers, display projections
//! - **Traits**: `Validatable` for declarative configuration
//! - **Errors**: Unified error handling with `DeskError` and `DeskResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DeskError, DeskResult, ResultExt};
pub use traits::Validatable;
pub use types::{
    Record, RecordId, StatusLevel, display_value, format_date, lookup_path, option_label,
    time_prefix,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
