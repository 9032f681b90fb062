//! # SiteDesk Schema
//!
//! Declarative description of every table page SiteDesk shows.
//!
//! ## Core Concepts
//!
//! - **Column**: How one table cell is projected from a backend record
//! - **FormField**: One input in an add or edit dialog, and the payload key it feeds
//! - **CollectionSpec**: Endpoint paths, columns, forms and reference lists for one entity
//! - **Catalog**: The built-in set of collection specs
//! - **Validator**: Consistency rules run over specs, including defect warnings
//!

// Module declarations
pub mod catalog;
pub mod collection;
pub mod column;
pub mod field;
pub mod validation;

// Re-export commonly used types at crate root
pub use catalog::{Catalog, paths};
pub use collection::{Capabilities, CollectionSpec, Endpoints};
pub use column::{CellFormat, Column};
pub use field::{FormField, WidgetType};
pub use validation::{
    ValidationError, ValidationErrorCode, ValidationResult, ValidationRule, ValidationWarning,
    ValidationWarningCode, Validator,
};

// Re-export core types that are commonly used with specs
pub use sitedesk_core::{DeskError, DeskResult, Record, RecordId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
