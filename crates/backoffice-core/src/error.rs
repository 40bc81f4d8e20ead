//! # Error Types
//!
//! Domain-specific error types for backoffice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  backoffice-core errors (this file)                                    │
//! │  ├── CoreError        - Domain errors (index, record, consistency)     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  admin app errors (apps/admin)                                         │
//! │  └── ApiError         - What the form layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, id, field)
//! 3. A bad line index and a missing record are different variants
//! 4. Invalid input is reported, never clamped

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A line-item operation was given an index past the end of the list.
    ///
    /// ## When This Occurs
    /// - The form sends a stale row index after a row was removed
    /// - A caller computes the index from a different list
    #[error("Line item index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// No record with the given id exists in the collection.
    #[error("{entity} not found: {id}")]
    RecordNotFound { entity: String, id: String },

    /// A derived field does not match its formula.
    ///
    /// Should be impossible for values built by this crate; seen when an
    /// order snapshot was edited outside the aggregator.
    ///
    /// ## User Workflow
    /// ```text
    /// Order loaded from API (subtotal: 500000)
    ///      │
    ///      ▼
    /// verify_order() recomputes from line items: 1000000
    ///      │
    ///      ▼
    /// StateInconsistency { field: "subtotal", expected: 1000000, actual: 500000 }
    ///      │
    ///      ▼
    /// View shows an error banner instead of a wrong total
    /// ```
    #[error("Inconsistent {field}: expected {expected}, found {actual}")]
    StateInconsistency {
        field: String,
        expected: i64,
        actual: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a not found error for the given entity kind.
    pub fn not_found(entity: &str, id: &str) -> Self {
        CoreError::RecordNotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below zero.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// Arithmetic on the value would overflow.
    ///
    /// A quantity and price that are each valid can still multiply past
    /// `i64::MAX`; the edit is refused instead of wrapping.
    #[error("{field} is too large")]
    TooLarge { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Line item index 3 is out of range (len 2)");

        let err = CoreError::not_found("Variant", "v-9");
        assert_eq!(err.to_string(), "Variant not found: v-9");

        let err = CoreError::StateInconsistency {
            field: "total".to_string(),
            expected: 1010000,
            actual: 510000,
        };
        assert_eq!(
            err.to_string(),
            "Inconsistent total: expected 1010000, found 510000"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "quantity".to_string(),
            value: -2,
        };
        assert_eq!(err.to_string(), "quantity must not be negative (got -2)");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "page size".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
