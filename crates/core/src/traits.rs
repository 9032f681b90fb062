//! Core traits for SiteDesk
//!
//! Declarative configuration (collection specs, client config) implements
//! `Validatable` so problems surface before any request is sent.

use crate::error::DeskResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use sitedesk_core::{Validatable, DeskResult, DeskError};
///
/// struct Endpoint {
///     path: String,
/// }
///
/// impl Validatable for Endpoint {
///     fn validate(&self) -> DeskResult<()> {
///         if !self.path.ends_with('/') {
///             return Err(DeskError::InvalidConfig("path must end with '/'".into()));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `DeskError` describing the problem.
    fn validate(&self) -> DeskResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;

    struct Path(&'static str);

    impl Validatable for Path {
        fn validate(&self) -> DeskResult<()> {
            if self.0.ends_with('/') {
                Ok(())
            } else {
                Err(DeskError::InvalidConfig(format!("'{}' lacks a trailing slash", self.0)))
            }
        }
    }

    #[test]
    fn test_validatable_defaults() {
        assert!(Path("/api/roles/").is_valid());
        assert!(Path("/api/roles/").validation_errors().is_empty());

        let errors = Path("/api/roles").validation_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("trailing slash"));
    }
}
