//! # Draft Commands
//!
//! Commands behind the invoice creation form.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  get_draft ──► set_header ──► add_item / update_item / remove_item     │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     set_discount / set_shipping                         │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                validate_draft ──► submit_draft (invoice.rs)            │
//! │                                                                         │
//! │  Every command returns the whole draft with fresh totals, so the UI    │
//! │  re-renders the summary from a single response.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use invoice_core::catalog::format_with_symbol;
use invoice_core::{
    Catalog, DraftHeaderPatch, InvoiceDraft, LineItem, LineItemInput, Money, Totals,
    ValidationReport,
};

use crate::error::ApiError;
use crate::state::{ConfigState, DraftState};

/// Draft response including totals and display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft: InvoiceDraft,
    pub totals: Totals,
    /// quantity × unit price per row, in row order
    pub line_amounts: Vec<Money>,
    pub currency_symbol: String,
    pub formatted: FormattedTotals,
}

/// Totals rendered as `"<symbol> 1,180.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub subtotal: String,
    pub tax_total: String,
    pub discount: String,
    pub shipping: String,
    pub total: String,
}

impl DraftResponse {
    pub fn new(draft: &InvoiceDraft, catalog: &Catalog) -> Self {
        let totals = draft.totals();
        let symbol = catalog.currency_symbol(&draft.currency);
        let fmt = |amount: Money| format_with_symbol(symbol, amount);

        DraftResponse {
            draft: draft.clone(),
            totals,
            line_amounts: draft.items.iter().map(LineItem::amount).collect(),
            currency_symbol: symbol.to_string(),
            formatted: FormattedTotals {
                subtotal: fmt(totals.subtotal),
                tax_total: fmt(totals.tax_total),
                discount: fmt(totals.discount),
                shipping: fmt(totals.shipping),
                total: fmt(totals.total),
            },
        }
    }
}

/// Gets the current draft.
pub fn get_draft(draft: &DraftState, catalog: &Catalog) -> DraftResponse {
    debug!("get_draft command");
    draft.with_draft(|d| DraftResponse::new(d, catalog))
}

/// Discards the current draft and starts a fresh one.
pub fn new_draft(draft: &DraftState, config: &ConfigState, catalog: &Catalog) -> DraftResponse {
    debug!("new_draft command");
    draft.reset(config, catalog);
    get_draft(draft, catalog)
}

/// Updates header fields (customer, number, dates, currency, notes, terms).
pub fn set_header(draft: &DraftState, catalog: &Catalog, patch: DraftHeaderPatch) -> DraftResponse {
    debug!(?patch, "set_header command");
    draft.with_draft_mut(|d| {
        d.set_header(patch);
        DraftResponse::new(d, catalog)
    })
}

/// Appends a row. `None` appends the blank "Add Item" row.
pub fn add_item(draft: &DraftState, catalog: &Catalog, item: Option<LineItem>) -> DraftResponse {
    debug!(?item, "add_item command");
    draft.with_draft_mut(|d| {
        let index = d.add_item(item);
        debug!(index, "Line item added");
        DraftResponse::new(d, catalog)
    })
}

/// Updates one row from form text.
///
/// ## Arguments
/// * `index` - Row position (0-based)
/// * `input` - Changed fields as typed; absent fields stay as they are
pub fn update_item(
    draft: &DraftState,
    config: &ConfigState,
    catalog: &Catalog,
    index: usize,
    input: LineItemInput,
) -> Result<DraftResponse, ApiError> {
    debug!(index, ?input, "update_item command");
    draft.with_draft_mut(|d| {
        d.update_item_from_input(index, input, config.coercion)?;
        Ok(DraftResponse::new(d, catalog))
    })
}

/// Removes one row. Later rows shift up.
pub fn remove_item(
    draft: &DraftState,
    catalog: &Catalog,
    index: usize,
) -> Result<DraftResponse, ApiError> {
    debug!(index, "remove_item command");
    draft.with_draft_mut(|d| {
        let removed = d.remove_item(index)?;
        debug!(name = %removed.name, "Line item removed");
        Ok(DraftResponse::new(d, catalog))
    })
}

/// Sets the discount percentage from form text.
pub fn set_discount(
    draft: &DraftState,
    config: &ConfigState,
    catalog: &Catalog,
    raw: &str,
) -> Result<DraftResponse, ApiError> {
    debug!(raw, "set_discount command");
    draft.with_draft_mut(|d| {
        d.set_discount_from_input(raw, config.coercion)?;
        Ok(DraftResponse::new(d, catalog))
    })
}

/// Sets the shipping amount from form text.
pub fn set_shipping(
    draft: &DraftState,
    config: &ConfigState,
    catalog: &Catalog,
    raw: &str,
) -> Result<DraftResponse, ApiError> {
    debug!(raw, "set_shipping command");
    draft.with_draft_mut(|d| {
        d.set_shipping_from_input(raw, config.coercion)?;
        Ok(DraftResponse::new(d, catalog))
    })
}

/// Runs validation without submitting.
pub fn validate_draft(draft: &DraftState, catalog: &Catalog) -> ValidationReport {
    debug!("validate_draft command");
    draft.with_draft(|d| invoice_core::validate_draft(d, catalog).into())
}
