//! # Validation Module
//!
//! Schema checks run before an invoice draft may be submitted.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Coercion (coerce.rs)                                         │
//! │  └── Raw text → typed values, per keystroke                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, on every submit attempt                         │
//! │  ├── Single-field rules (validate_quantity, validate_amount, ...)      │
//! │  └── validate_draft: runs every rule, collects ALL failures            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  FieldErrors { "customerId": ..., "items.0.quantity": ... }            │
//! │  The UI shows each message next to its field                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::catalog::Catalog;
//! use invoice_core::draft::{DraftDefaults, InvoiceDraft};
//! use invoice_core::validation::validate_draft;
//! use chrono::NaiveDate;
//!
//! let catalog = Catalog::sample();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut draft = InvoiceDraft::new(&DraftDefaults::default(), &catalog, today, "INV-1001");
//! assert!(validate_draft(&draft, &catalog).is_ok());
//!
//! draft.items.clear();
//! let errors = validate_draft(&draft, &catalog).unwrap_err();
//! assert!(errors.get("items").is_some());
//! ```
//!
//! `dueDate` is not compared against `issueDate`.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::coerce::MIN_QUANTITY;
use crate::draft::{parse_form_date, InvoiceDraft};
use crate::error::ValidationError;
use crate::line_item::{item_field, LineItem};
use crate::money::Money;
use crate::types::Percent;

/// Largest quantity accepted on one row.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest unit price or shipping amount accepted (100,000,000.00).
pub const MAX_AMOUNT: Money = Money::from_major(100_000_000);

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Paths
// =============================================================================

/// A form path such as `customerId` or `items.10.name`.
///
/// Ordered segment by segment, comparing numeric segments as numbers so
/// rows come out in display order:
///
/// ```rust
/// use invoice_core::validation::FieldPath;
///
/// assert!(FieldPath::from("items.2.name") < FieldPath::from("items.10.name"));
/// assert!(FieldPath::from("items") < FieldPath::from("items.0.name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        FieldPath(path.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        FieldPath(path)
    }
}

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.0.split('.');
        let mut right = other.0.split('.');
        loop {
            let ord = match (left.next(), right.next()) {
                (None, None) => return self.0.cmp(&other.0),
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match (a.parse::<u64>(), b.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => a.cmp(b),
                },
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
    }
}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Validation failures keyed by form path, in path order.
///
/// One error per field: the first rule a field fails is the one reported.
///
/// Serializes as `{ "<path>": "<message>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldPath, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// Records `error` under its own field path unless that field already
    /// has one.
    pub fn push(&mut self, error: ValidationError) {
        self.0.entry(FieldPath::from(error.field())).or_insert(error);
    }

    /// Records the error of `result`, if any.
    pub fn check(&mut self, result: ValidationResult<()>) {
        if let Err(error) = result {
            self.push(error);
        }
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(&FieldPath::from(field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field path → rendered message.
    pub fn messages(&self) -> BTreeMap<FieldPath, String> {
        self.0
            .iter()
            .map(|(field, error)| (field.clone(), error.to_string()))
            .collect()
    }

    /// `Ok(())` when empty.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field, &error.to_string())?;
        }
        map.end()
    }
}

/// `{valid, errors}` view of a validation run for the UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl From<Result<(), FieldErrors>> for ValidationReport {
    fn from(result: Result<(), FieldErrors>) -> Self {
        match result {
            Ok(()) => ValidationReport {
                valid: true,
                errors: FieldErrors::new(),
            },
            Err(errors) => ValidationReport {
                valid: false,
                errors,
            },
        }
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is not blank.
///
/// ```rust
/// use invoice_core::validation::validate_required;
///
/// assert!(validate_required("invoiceNumber", "INV-1001").is_ok());
/// assert!(validate_required("invoiceNumber", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a form date: required, then `YYYY-MM-DD`.
pub fn validate_date(field: &str, value: &str) -> ValidationResult<()> {
    validate_required(field, value)?;

    if parse_form_date(value).is_none() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a date as YYYY-MM-DD".to_string(),
        });
    }

    Ok(())
}

/// Validates that `customer_id` is set and present in the catalog.
pub fn validate_customer(field: &str, customer_id: &str, catalog: &Catalog) -> ValidationResult<()> {
    validate_required(field, customer_id)?;

    if catalog.customer(customer_id).is_none() {
        return Err(ValidationError::UnknownReference {
            field: field.to_string(),
            value: customer_id.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity: between 1 and [`MAX_QUANTITY`].
///
/// ```rust
/// use invoice_core::validation::validate_quantity;
///
/// assert!(validate_quantity("items.0.quantity", 1).is_ok());
/// assert!(validate_quantity("items.0.quantity", 0).is_err());
/// assert!(validate_quantity("items.0.quantity", 100_000_000_000).is_err());
/// ```
pub fn validate_quantity(field: &str, qty: i64) -> ValidationResult<()> {
    if qty < MIN_QUANTITY {
        return Err(ValidationError::TooSmall {
            field: field.to_string(),
            min: MIN_QUANTITY.to_string(),
        });
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max: MAX_QUANTITY.to_string(),
        });
    }

    Ok(())
}

/// Validates an amount that may be zero but not negative (price, shipping),
/// capped at [`MAX_AMOUNT`].
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::TooSmall {
            field: field.to_string(),
            min: "0".to_string(),
        });
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max: MAX_AMOUNT.to_string(),
        });
    }

    Ok(())
}

/// Validates a percentage in `[0, 100]` (tax rate, discount).
///
/// ```rust
/// use invoice_core::types::Percent;
/// use invoice_core::validation::validate_percent;
///
/// assert!(validate_percent("discountPercent", Percent::from_whole(100)).is_ok());
/// assert!(validate_percent("discountPercent", Percent::from_whole(150)).is_err());
/// ```
pub fn validate_percent(field: &str, rate: Percent) -> ValidationResult<()> {
    if !rate.is_within_full_range() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Validates one row, recording failures under `items.<index>.*`.
pub fn validate_line_item(index: usize, item: &LineItem, errors: &mut FieldErrors) {
    errors.check(validate_required(&item_field(index, "name"), &item.name));
    errors.check(validate_quantity(&item_field(index, "quantity"), item.quantity));
    errors.check(validate_amount(&item_field(index, "price"), item.unit_price));
    errors.check(validate_percent(&item_field(index, "taxRate"), item.tax_rate));
}

/// Runs every rule against `draft` and returns all failures.
pub fn validate_draft(draft: &InvoiceDraft, catalog: &Catalog) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    errors.check(validate_customer("customerId", &draft.customer_id, catalog));
    errors.check(validate_required("invoiceNumber", &draft.invoice_number));
    errors.check(validate_date("issueDate", &draft.issue_date));
    errors.check(validate_date("dueDate", &draft.due_date));
    errors.check(validate_required("currency", &draft.currency));

    if draft.items.is_empty() {
        errors.push(ValidationError::TooFew {
            field: "items".to_string(),
            min: 1,
        });
    }
    for (index, item) in draft.items.iter().enumerate() {
        validate_line_item(index, item, &mut errors);
    }

    errors.check(validate_percent("discountPercent", draft.discount_percent));
    errors.check(validate_amount("shipping", draft.shipping));

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================
