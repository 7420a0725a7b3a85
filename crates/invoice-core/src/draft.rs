//! # Invoice Draft
//!
//! The in-progress invoice behind the creation form.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Form mounts ──► InvoiceDraft::new(defaults, catalog, today, number)   │
//! │                    • number   = "INV-" + 4 random digits                │
//! │                    • issue    = today, due = today + 7 days             │
//! │                    • customer = first in catalog                        │
//! │                    • one "Service Fee" row                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  User edits ───► set_header / add_item / update_item / remove_item     │
//! │                  set_discount / set_shipping                           │
//! │       │          (totals() recomputed after every edit)                │
//! │       ▼                                                                 │
//! │  Submit ───────► validate → InvoicePayload → store → discarded         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dates are kept as the `YYYY-MM-DD` text a date input produces, so that an
//! emptied field is representable and reported by validation.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::coerce::{coerce_money, coerce_percent, CoercionPolicy};
use crate::error::CoreResult;
use crate::line_item::{LineItem, LineItemInput, LineItemPatch, LineItems};
use crate::money::Money;
use crate::totals::{compute_totals, Totals};
use crate::types::Percent;
use crate::{DEFAULT_CURRENCY, DEFAULT_DUE_DAYS, DEFAULT_INVOICE_PREFIX, DEFAULT_TERMS};

/// Date format produced by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses form date text.
pub fn parse_form_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Renders a date as form text.
pub fn format_form_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// =============================================================================
// Invoice Numbers
// =============================================================================

/// `prefix` followed by a number in `1000..=9999` derived from `seed`.
pub fn invoice_number_from_seed(prefix: &str, seed: u128) -> String {
    format!("{}{}", prefix, 1000 + seed % 9000)
}

/// `prefix` followed by four random digits, e.g. `INV-4821`.
///
/// Not guaranteed unique; the user may edit it before submitting.
pub fn generate_invoice_number(prefix: &str) -> String {
    invoice_number_from_seed(prefix, Uuid::new_v4().as_u128())
}

// =============================================================================
// Draft Defaults
// =============================================================================

/// Values a fresh draft starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftDefaults {
    pub invoice_prefix: String,
    pub due_in_days: u32,
    pub currency: String,
    pub terms: String,
    /// Start with the "Service Fee" row instead of an empty table.
    pub seed_item: bool,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        DraftDefaults {
            invoice_prefix: DEFAULT_INVOICE_PREFIX.to_string(),
            due_in_days: DEFAULT_DUE_DAYS,
            currency: DEFAULT_CURRENCY.to_string(),
            terms: DEFAULT_TERMS.to_string(),
            seed_item: true,
        }
    }
}

// =============================================================================
// Header Patch
// =============================================================================

/// Partial update of the non-item fields. `None` leaves a field untouched.
///
/// `notes`/`terms` use `Some(String::new())` to clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DraftHeaderPatch {
    pub customer_id: Option<String>,
    pub invoice_number: Option<String>,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub currency: Option<String>,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// An unsaved invoice being composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub customer_id: String,
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    /// ISO 4217 code.
    pub currency: String,
    pub notes: Option<String>,
    pub terms: Option<String>,
    #[serde(default)]
    pub discount_percent: Percent,
    #[serde(default)]
    pub shipping: Money,
    pub items: LineItems,
}

impl InvoiceDraft {
    /// Builds a fresh draft.
    ///
    /// `today` and `invoice_number` come from the caller so that this crate
    /// never reads the clock.
    pub fn new(
        defaults: &DraftDefaults,
        catalog: &Catalog,
        today: NaiveDate,
        invoice_number: impl Into<String>,
    ) -> Self {
        let due = today
            .checked_add_days(Days::new(u64::from(defaults.due_in_days)))
            .unwrap_or(today);

        let mut items = LineItems::new();
        if defaults.seed_item {
            items.add(LineItem::service_fee());
        }

        InvoiceDraft {
            customer_id: catalog
                .default_customer()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            invoice_number: invoice_number.into(),
            issue_date: format_form_date(today),
            due_date: format_form_date(due),
            currency: defaults.currency.clone(),
            notes: Some(String::new()),
            terms: Some(defaults.terms.clone()),
            discount_percent: Percent::zero(),
            shipping: Money::zero(),
            items,
        }
    }

    /// Derived totals for the current state.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.discount_percent, self.shipping)
    }

    pub fn set_header(&mut self, patch: DraftHeaderPatch) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(invoice_number) = patch.invoice_number {
            self.invoice_number = invoice_number;
        }
        if let Some(issue_date) = patch.issue_date {
            self.issue_date = issue_date;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(terms) = patch.terms {
            self.terms = Some(terms);
        }
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Appends `item` (or a blank row) and returns its index.
    pub fn add_item(&mut self, item: Option<LineItem>) -> usize {
        self.items.add(item.unwrap_or_default())
    }

    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        self.items.remove(index)
    }

    pub fn update_item(&mut self, index: usize, patch: LineItemPatch) -> CoreResult<&LineItem> {
        self.items.update(index, patch)
    }

    pub fn update_item_from_input(
        &mut self,
        index: usize,
        input: LineItemInput,
        policy: CoercionPolicy,
    ) -> CoreResult<&LineItem> {
        self.items.update_from_input(index, input, policy)
    }

    // -------------------------------------------------------------------------
    // Adjustments
    // -------------------------------------------------------------------------

    pub fn set_discount(&mut self, discount_percent: Percent) {
        self.discount_percent = discount_percent;
    }

    pub fn set_shipping(&mut self, shipping: Money) {
        self.shipping = shipping;
    }

    /// Sets the discount from form text.
    pub fn set_discount_from_input(&mut self, raw: &str, policy: CoercionPolicy) -> CoreResult<()> {
        self.discount_percent = coerce_percent("discountPercent", raw, policy)?;
        Ok(())
    }

    /// Sets shipping from form text.
    pub fn set_shipping_from_input(&mut self, raw: &str, policy: CoercionPolicy) -> CoreResult<()> {
        self.shipping = coerce_money("shipping", raw, policy)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 28).unwrap()
    }

    fn fresh() -> InvoiceDraft {
        InvoiceDraft::new(&DraftDefaults::default(), &Catalog::sample(), today(), "INV-1234")
    }

    #[test]
    fn test_fresh_draft_defaults() {
        let draft = fresh();
        assert_eq!(draft.customer_id, "c1");
        assert_eq!(draft.invoice_number, "INV-1234");
        assert_eq!(draft.issue_date, "2024-01-28");
        // Crosses a month boundary
        assert_eq!(draft.due_date, "2024-02-04");
        assert_eq!(draft.currency, "INR");
        assert_eq!(draft.terms.as_deref(), Some("Payment due within 7 days."));
        assert_eq!(draft.discount_percent, Percent::zero());
        assert_eq!(draft.shipping, Money::zero());
        assert_eq!(draft.items.list(), &[LineItem::service_fee()]);
        assert_eq!(draft.totals().total, Money::from_major(1180));
    }

    #[test]
    fn test_draft_without_seed_item_or_customers() {
        let defaults = DraftDefaults {
            seed_item: false,
            ..Default::default()
        };
        let draft = InvoiceDraft::new(&defaults, &Catalog::default(), today(), "X-1");
        assert!(draft.items.is_empty());
        assert_eq!(draft.customer_id, "");
        assert_eq!(draft.totals(), Totals::default());
    }

    #[test]
    fn test_invoice_number_format() {
        assert_eq!(invoice_number_from_seed("INV-", 0), "INV-1000");
        assert_eq!(invoice_number_from_seed("INV-", 8999), "INV-9999");
        assert_eq!(invoice_number_from_seed("INV-", 9000), "INV-1000");

        let generated = generate_invoice_number("INV-");
        let digits: u32 = generated.trim_start_matches("INV-").parse().unwrap();
        assert!((1000..=9999).contains(&digits));
    }

    #[test]
    fn test_set_header_partial() {
        let mut draft = fresh();
        draft.set_header(DraftHeaderPatch {
            customer_id: Some("c3".to_string()),
            notes: Some("Thanks!".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.customer_id, "c3");
        assert_eq!(draft.notes.as_deref(), Some("Thanks!"));
        assert_eq!(draft.invoice_number, "INV-1234");
    }

    #[test]
    fn test_adjustments_from_input() {
        let mut draft = fresh();
        draft
            .set_discount_from_input("10", CoercionPolicy::Lenient)
            .unwrap();
        draft
            .set_shipping_from_input("15.50", CoercionPolicy::Lenient)
            .unwrap();

        let totals = draft.totals();
        assert_eq!(totals.discount, Money::from_major(100));
        assert_eq!(totals.shipping, Money::from_minor(1550));
        assert_eq!(totals.total, Money::from_minor(109_550));

        assert!(draft
            .set_shipping_from_input("free", CoercionPolicy::Strict)
            .is_err());
        // Rejected input leaves the previous value
        assert_eq!(draft.shipping, Money::from_minor(1550));
    }

    #[test]
    fn test_item_operations_through_draft() {
        let mut draft = fresh();
        let index = draft.add_item(None);
        assert_eq!(index, 1);
        assert_eq!(draft.items.get(1), Some(&LineItem::blank()));

        draft
            .update_item(
                1,
                LineItemPatch {
                    name: Some("Support".to_string()),
                    unit_price: Some(Money::from_major(200)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(draft.totals().subtotal, Money::from_major(1200));

        draft.remove_item(0).unwrap();
        assert_eq!(draft.totals().total, Money::from_major(200));
    }

    #[test]
    fn test_parse_form_date() {
        assert_eq!(parse_form_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_form_date("2023-02-29"), None);
        assert_eq!(parse_form_date("29/02/2024"), None);
        assert_eq!(parse_form_date(""), None);
    }

    #[test]
    fn test_draft_deserializes_with_default_adjustments() {
        let json = serde_json::json!({
            "customerId": "c1",
            "invoiceNumber": "INV-1",
            "issueDate": "2024-01-01",
            "dueDate": "2024-01-08",
            "currency": "USD",
            "notes": null,
            "terms": null,
            "items": []
        });
        let draft: InvoiceDraft = serde_json::from_value(json).unwrap();
        assert_eq!(draft.discount_percent, Percent::zero());
        assert_eq!(draft.shipping, Money::zero());
    }
}
