//! Error types for SiteDesk
//!
//! This module provides unified error handling across the workspace:
//! network and HTTP failures reported by the backend transport, user errors
//! raised by the table controllers, and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for SiteDesk
#[derive(Debug, Error)]
pub enum DeskError {
    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// The request never produced a response (connection refused, DNS, TLS...)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status} from {path}")]
    Http {
        status: u16,
        path: String,
        body: String,
    },

    /// The response body could not be decoded
    #[error("Unexpected response from {path}: {message}")]
    Decode { path: String, message: String },

    // ========================================================================
    // User Errors
    // ========================================================================
    /// An edit or delete was requested without a selected row
    #[error("Please select {0} from the list")]
    NoSelection(String),

    /// The requested action is not offered by this collection
    #[error("Action '{action}' is not available for '{collection}'")]
    ActionUnavailable { collection: String, action: String },

    /// The backend rejected the supplied credentials
    #[error("Login failed: {0}")]
    LoginRejected(String),

    // ========================================================================
    // Schema Errors
    // ========================================================================
    /// Collection not found in the catalog
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// Field not found in a collection form
    #[error("Field '{field}' not found in collection '{collection}'")]
    UnknownField { collection: String, field: String },

    /// Collection spec validation failed
    #[error("Collection '{collection}' is misconfigured: {message}")]
    SpecValidation { collection: String, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read config '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    // ========================================================================
    // IO / Serialization
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl DeskError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        DeskError::Network(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, path: impl Into<String>, body: impl Into<String>) -> Self {
        DeskError::Http {
            status,
            path: path.into(),
            body: body.into(),
        }
    }

    /// Create a missing-selection error for the given item noun
    pub fn no_selection(item: impl Into<String>) -> Self {
        DeskError::NoSelection(item.into())
    }

    /// Create a spec validation error
    pub fn spec(collection: impl Into<String>, msg: impl Into<String>) -> Self {
        DeskError::SpecValidation {
            collection: collection.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DeskError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        DeskError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if the request failed before any response arrived
    pub fn is_network(&self) -> bool {
        matches!(self, DeskError::Network(_))
    }

    /// Check if the backend answered with an error status or garbage
    pub fn is_http(&self) -> bool {
        matches!(self, DeskError::Http { .. } | DeskError::Decode { .. })
    }

    /// Check if this error was caused by the user rather than the backend
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DeskError::NoSelection(_)
                | DeskError::ActionUnavailable { .. }
                | DeskError::LoginRejected(_)
        )
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            DeskError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using DeskError
pub type DeskResult<T> = Result<T, DeskError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> DeskResult<T>;
}

impl<T, E: Into<DeskError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> DeskResult<T> {
        self.map_err(|e| {
            let err: DeskError = e.into();
            DeskError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error() {
        let err = DeskError::network("connection refused");
        assert!(err.is_network());
        assert!(!err.is_http());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_http_error() {
        let err = DeskError::http(400, "/api/materials/", r#"{"name":["required"]}"#);
        assert!(err.is_http());
        assert!(!err.is_user_error());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "HTTP 400 from /api/materials/");
    }

    #[test]
    fn test_no_selection_is_user_error() {
        let err = DeskError::no_selection("a material");
        assert!(err.is_user_error());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Please select a material from the list");
    }

    #[test]
    fn test_spec_error() {
        let err = DeskError::spec("users", "reset field 'name' is not in the add form");
        assert_eq!(
            err.to_string(),
            "Collection 'users' is misconfigured: reset field 'name' is not in the add form"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = DeskError::with_context("Loading config", "Permission denied");
        assert_eq!(err.to_string(), "Loading config: Permission denied");
    }

    #[test]
    fn test_result_ext() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.with_context("Reading sitedesk.toml").unwrap_err();
        assert_eq!(err.to_string(), "Reading sitedesk.toml: IO error: missing");
    }
}
