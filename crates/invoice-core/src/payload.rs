//! # Invoice Payload
//!
//! The finalized form of a draft that is handed to persistence.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InvoiceDraft ──► validate_draft ──✗──► FieldErrors (nothing built)    │
//! │                          │                                              │
//! │                          ✓                                              │
//! │                          ▼                                              │
//! │  InvoicePayload { draft fields, parsed dates, customer name,           │
//! │                   currency symbol, totals }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Building the payload is pure; the app crate does the hand-off.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{format_with_symbol, Catalog};
use crate::draft::{parse_form_date, InvoiceDraft};
use crate::error::ValidationError;
use crate::line_item::LineItem;
use crate::listing::{InvoiceStatus, InvoiceSummary};
use crate::money::Money;
use crate::totals::Totals;
use crate::types::Percent;
use crate::validation::{validate_draft, FieldErrors};

/// Route the UI navigates to after a successful submission.
pub const INVOICES_ROUTE: &str = "/invoices";

/// A validated invoice, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub invoice_number: String,
    #[ts(as = "String")]
    pub issue_date: NaiveDate,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub currency: String,
    pub currency_symbol: String,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub discount_percent: Percent,
    pub shipping: Money,
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl InvoicePayload {
    /// Validates `draft` and, if it passes, builds the payload.
    pub fn assemble(draft: &InvoiceDraft, catalog: &Catalog) -> Result<Self, FieldErrors> {
        validate_draft(draft, catalog)?;

        let customer = catalog.customer(&draft.customer_id).ok_or_else(|| {
            single_error(ValidationError::UnknownReference {
                field: "customerId".to_string(),
                value: draft.customer_id.clone(),
            })
        })?;
        let issue_date = required_date("issueDate", &draft.issue_date)?;
        let due_date = required_date("dueDate", &draft.due_date)?;

        Ok(InvoicePayload {
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            invoice_number: draft.invoice_number.trim().to_string(),
            issue_date,
            due_date,
            currency: draft.currency.clone(),
            currency_symbol: catalog.currency_symbol(&draft.currency).to_string(),
            notes: non_blank(&draft.notes),
            terms: non_blank(&draft.terms),
            discount_percent: draft.discount_percent,
            shipping: draft.shipping,
            items: draft.items.list().to_vec(),
            totals: draft.totals(),
        })
    }

    /// Notification shown once the invoice is saved.
    pub fn acknowledgement(&self) -> Acknowledgement {
        Acknowledgement {
            title: "Invoice created".to_string(),
            description: format!("#{} for {}", self.invoice_number, self.customer_name),
        }
    }

    /// Grand total formatted with the invoice's currency symbol.
    pub fn formatted_total(&self) -> String {
        format_with_symbol(&self.currency_symbol, self.totals.total)
    }

    /// Row for the invoices table.
    pub fn summary(&self, status: InvoiceStatus) -> InvoiceSummary {
        InvoiceSummary {
            id: self.invoice_number.clone(),
            client: self.customer_name.clone(),
            email: self.customer_email.clone(),
            amount: self.totals.total,
            status,
            date: self.issue_date.to_string(),
            due_date: self.due_date.to_string(),
        }
    }
}

/// User-visible confirmation of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Acknowledgement {
    pub title: String,
    pub description: String,
}

fn single_error(error: ValidationError) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.push(error);
    errors
}

fn required_date(field: &str, text: &str) -> Result<NaiveDate, FieldErrors> {
    parse_form_date(text).ok_or_else(|| {
        single_error(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a date as YYYY-MM-DD".to_string(),
        })
    })
}

fn non_blank(text: &Option<String>) -> Option<String> {
    text.as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftDefaults;

    fn draft() -> InvoiceDraft {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        InvoiceDraft::new(&DraftDefaults::default(), &Catalog::sample(), today, "INV-4821")
    }

    #[test]
    fn test_assemble_valid_draft() {
        let payload = InvoicePayload::assemble(&draft(), &Catalog::sample()).unwrap();

        assert_eq!(payload.customer_name, "ABC Corporation");
        assert_eq!(payload.currency_symbol, "₹");
        assert_eq!(payload.issue_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(payload.due_date, NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
        assert_eq!(payload.totals.total, Money::from_major(1180));
        // Empty notes are dropped, terms kept
        assert_eq!(payload.notes, None);
        assert_eq!(payload.terms.as_deref(), Some("Payment due within 7 days."));
        assert_eq!(payload.formatted_total(), "₹ 1,180.00");
    }

    #[test]
    fn test_assemble_refuses_invalid_draft() {
        let mut draft = draft();
        draft.items.clear();
        draft.invoice_number.clear();

        let errors = InvoicePayload::assemble(&draft, &Catalog::sample()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("items").is_some());
        assert!(errors.get("invoiceNumber").is_some());
    }

    #[test]
    fn test_unknown_currency_falls_back_to_dollar() {
        let mut draft = draft();
        draft.currency = "GBP".to_string();
        let payload = InvoicePayload::assemble(&draft, &Catalog::sample()).unwrap();
        assert_eq!(payload.currency_symbol, "$");
    }

    #[test]
    fn test_acknowledgement_and_summary() {
        let payload = InvoicePayload::assemble(&draft(), &Catalog::sample()).unwrap();

        let ack = payload.acknowledgement();
        assert_eq!(ack.title, "Invoice created");
        assert_eq!(ack.description, "#INV-4821 for ABC Corporation");

        let row = payload.summary(InvoiceStatus::Pending);
        assert_eq!(row.id, "INV-4821");
        assert_eq!(row.amount, Money::from_major(1180));
        assert_eq!(row.date, "2024-01-15");
        assert_eq!(row.due_date, "2024-01-22");
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = InvoicePayload::assemble(&draft(), &Catalog::sample()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["issueDate"], "2024-01-15");
        assert_eq!(json["currencySymbol"], "₹");
        assert_eq!(json["totals"]["taxTotal"], 18_000);
    }
}
