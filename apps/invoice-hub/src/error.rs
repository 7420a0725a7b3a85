//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Invoice Hub                            │
//! │                                                                         │
//! │  UI host                     Rust Backend                               │
//! │  ───────                     ────────────                               │
//! │                                                                         │
//! │  invoke('submit_draft')                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Invalid draft? ─── FieldErrors {path: message} ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Store failed? ──── StoreError ─────────────────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │    // e.fieldErrors["items.0.name"] = "items.0.name is required"        │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use invoice_core::{CoreError, FieldErrors, FieldPath};

// =============================================================================
// Store Error
// =============================================================================

/// Failures of the persistence collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Invoice store unavailable: {0}")]
    Unavailable(String),

    /// An invoice with this number is already stored.
    #[error("Invoice {invoice_number} already exists")]
    Duplicate { invoice_number: String },

    #[error("Invoice store error: {0}")]
    Internal(String),
}

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// API Error
// =============================================================================

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Invoice has 1 invalid field",
///   "fieldErrors": { "items": "items must contain at least 1 entry" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages in form order, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<FieldPath, String>>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Line item index out of range
    LineItemError,

    /// The store rejected or could not take the invoice
    PersistenceError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    fn with_field_errors(mut self, field_errors: BTreeMap<FieldPath, String>) -> Self {
        self.field_errors = Some(field_errors);
        self
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineItemNotFound { .. } => {
                ApiError::new(ErrorCode::LineItemError, err.to_string())
            }
            CoreError::Validation(e) => {
                let fields = BTreeMap::from([(FieldPath::from(e.field()), e.to_string())]);
                ApiError::validation(e.to_string()).with_field_errors(fields)
            }
        }
    }
}

/// Converts a failed draft validation to an API error.
impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        let count = errors.len();
        let noun = if count == 1 { "field" } else { "fields" };
        ApiError::validation(format!("Invoice has {} invalid {}", count, noun))
            .with_field_errors(errors.messages())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if let StoreError::Internal(detail) = &err {
            // Log the detail but return a generic message
            tracing::error!(%detail, "Invoice store internal error");
            return ApiError::new(ErrorCode::PersistenceError, "Failed to save invoice");
        }
        ApiError::new(ErrorCode::PersistenceError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
