//! # invoice-core: Pure Business Logic for Invoice Hub
//!
//! This crate holds everything the invoice creation form computes: line
//! item math, totals, input coercion, validation and payload assembly.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Invoice Hub Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (form + tables)                     │   │
//! │  │    Header fields ──► Items table ──► Summary ──► Submit        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    invoice-hub (app crate)                      │   │
//! │  │    add_item, update_item, set_discount, submit_draft, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ invoice-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ line_item │  │  totals   │  │ validation│  │   │
//! │  │   │  Money    │  │ LineItems │  │  Totals   │  │FieldErrors│  │   │
//! │  │   │  Percent  │  │  coerce   │  │           │  │  payload  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in minor units (no floating point)
//! - [`types`] - Percent in basis points
//! - [`catalog`] - Customers and currencies the form picks from
//! - [`coerce`] - Form text → numbers
//! - [`line_item`] - Rows of the items table
//! - [`totals`] - Subtotal, tax, discount, shipping, total
//! - [`draft`] - The in-progress invoice
//! - [`validation`] - Field rules and `FieldErrors`
//! - [`payload`] - What gets persisted on submit
//! - [`listing`] - Search, filter, paging and header totals for the tables
//! - [`directory`] - Customer, employee and transaction records
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::{compute_totals, LineItem, Money, Percent};
//!
//! let items = vec![
//!     LineItem::new("Design", 2, Money::from_major(50), Percent::from_whole(10)),
//!     LineItem::new("Hosting", 1, Money::from_major(20), Percent::zero()),
//! ];
//!
//! let totals = compute_totals(&items, Percent::from_whole(10), Money::from_major(15));
//!
//! assert_eq!(totals.subtotal, Money::from_major(120));
//! assert_eq!(totals.tax_total, Money::from_major(10));
//! assert_eq!(totals.discount, Money::from_major(12));
//! assert_eq!(totals.total, Money::from_major(133));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod coerce;
pub mod directory;
pub mod draft;
pub mod error;
pub mod line_item;
pub mod listing;
pub mod money;
pub mod payload;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Currency, Customer};
pub use coerce::CoercionPolicy;
pub use directory::Directory;
pub use draft::{DraftDefaults, DraftHeaderPatch, InvoiceDraft};
pub use error::{CoreError, CoreResult, ValidationError};
pub use line_item::{LineItem, LineItemInput, LineItemPatch, LineItems};
pub use listing::{
    CustomerRecord, EmployeeRecord, InvoiceStatus, InvoiceSummary, ListQuery, Page,
    TransactionRecord,
};
pub use money::Money;
pub use payload::{Acknowledgement, InvoicePayload};
pub use totals::{compute_totals, Totals};
pub use types::Percent;
pub use validation::{validate_draft, FieldErrors, FieldPath, ValidationReport};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of generated invoice numbers.
pub const DEFAULT_INVOICE_PREFIX: &str = "INV-";

/// Days between issue date and due date on a fresh draft.
pub const DEFAULT_DUE_DAYS: u32 = 7;

/// Currency preselected on a fresh draft.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Payment terms prefilled on a fresh draft.
pub const DEFAULT_TERMS: &str = "Payment due within 7 days.";
