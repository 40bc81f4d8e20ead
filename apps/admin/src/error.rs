//! # API Error Type
//!
//! Unified error type for the dashboard's form and table actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  Frontend                    Rust View State                            │
//! │  ────────                    ───────────────                            │
//! │                                                                         │
//! │  quantity input: "-1"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  OrderForm::set_quantity                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad row index? ─── CoreError::IndexOutOfRange ───┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Validation Error? ─── CoreError::Validation ── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code    = "VALIDATION_ERROR"                                         │
//! │  e.message = "quantity must not be negative (got -1)"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use backoffice_core::{CoreError, ValidationError};
use serde::Serialize;

/// Error returned from view-state actions.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Variant not found: 5f0c..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// A row index the list does not have
    IndexOutOfRange,

    /// The form refused an action (e.g. removing the last row)
    FormRule,

    /// Derived state disagrees with its inputs
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn form_rule(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::FormRule, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::IndexOutOfRange { index, len } => ApiError::new(
                ErrorCode::IndexOutOfRange,
                format!("Row {} does not exist ({} rows)", index, len),
            ),
            CoreError::RecordNotFound { entity, id } => ApiError::not_found(&entity, &id),
            CoreError::StateInconsistency {
                field,
                expected,
                actual,
            } => {
                // Log the numbers, show a generic message
                tracing::error!(%field, expected, actual, "Derived order state is inconsistent");
                ApiError::internal(format!("Order {} could not be verified", field))
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
