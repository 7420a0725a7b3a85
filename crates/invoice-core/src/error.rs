//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoice-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - One field failed one rule                      │
//! │                                                                         │
//! │  invoice-core validation (validation.rs)                               │
//! │  └── FieldErrors      - field path → ValidationError, many at once     │
//! │                                                                         │
//! │  invoice-hub errors (app crate)                                        │
//! │  ├── StoreError       - Persistence collaborator failures              │
//! │  └── ApiError         - What the UI host sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors/CoreError → ApiError → UI         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field path, index, id)
//! 3. Errors are enum variants, never String
//! 4. Each `ValidationError` renders as the message shown next to its field

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A line item operation addressed a row that does not exist.
    ///
    /// ## When This Occurs
    /// - The UI sent a stale index after a concurrent remove
    /// - `update`/`remove` on an empty collection
    #[error("Line item {index} not found (draft has {len} items)")]
    LineItemNotFound { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failing a single rule.
///
/// The `field` is the form path of the offending input (`customerId`,
/// `items.2.quantity`, ...). The rendered message is what the UI shows
/// next to that input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection has fewer entries than allowed.
    #[error("{field} must contain at least {min} entry")]
    TooFew { field: String, min: usize },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: String, min: String },

    /// Numeric value is above its maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },

    /// Numeric value is outside an inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Invalid format (e.g., unparseable number, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value does not refer to a known record.
    #[error("{field} '{value}' does not match any known record")]
    UnknownReference { field: String, value: String },
}

impl ValidationError {
    /// The form path this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooFew { field, .. }
            | ValidationError::TooSmall { field, .. }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownReference { field, .. } => field,
        }
    }
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
        let err = CoreError::LineItemNotFound { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "Line item 3 not found (draft has 2 items)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "invoiceNumber".to_string(),
        };
        assert_eq!(err.to_string(), "invoiceNumber is required");

        let err = ValidationError::OutOfRange {
            field: "discountPercent".to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
        };
        assert_eq!(err.to_string(), "discountPercent must be between 0 and 100");

        let err = ValidationError::TooFew {
            field: "items".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "items must contain at least 1 entry");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::TooSmall {
            field: "items.0.quantity".to_string(),
            min: "1".to_string(),
        };
        assert_eq!(err.field(), "items.0.quantity");

        let err = ValidationError::TooLarge {
            field: "items.3.price".to_string(),
            max: "100000000.00".to_string(),
        };
        assert_eq!(err.field(), "items.3.price");
        assert_eq!(err.to_string(), "items.3.price must be at most 100000000.00");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customerId".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
