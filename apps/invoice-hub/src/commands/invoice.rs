//! # Invoice Commands
//!
//! Submission of the active draft and the invoices table.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Snapshot draft (lock released immediately)                         │
//! │  2. Validate + assemble payload                                         │
//! │        ✗ ──► VALIDATION_ERROR { fieldErrors }   store never called     │
//! │  3. store.save(payload).await                                           │
//! │        ✗ ──► PERSISTENCE_ERROR                  draft kept             │
//! │  4. Replace draft with a fresh one, unless it was edited meanwhile     │
//! │  5. Return acknowledgement + redirect "/invoices"                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use invoice_core::listing::list;
use invoice_core::payload::INVOICES_ROUTE;
use invoice_core::{
    Acknowledgement, Catalog, InvoicePayload, InvoiceStatus, InvoiceSummary, ListQuery, Page,
};

use crate::error::ApiError;
use crate::state::{ConfigState, DraftState};
use crate::store::InvoiceStore;

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub invoice_id: Uuid,
    pub acknowledgement: Acknowledgement,
    /// Route the UI navigates to
    pub redirect: String,
    pub invoice: InvoicePayload,
}

/// Validates the active draft and hands it to `store`.
///
/// ## Returns
/// - `Ok(SubmissionResult)`: saved; the active draft is now a fresh one
///   unless it changed while the store was working
/// - `Err(VALIDATION_ERROR)`: nothing was sent; `fieldErrors` says why
/// - `Err(PERSISTENCE_ERROR)`: the store failed; the draft is unchanged
pub async fn submit_draft<S: InvoiceStore>(
    draft: &DraftState,
    config: &ConfigState,
    catalog: &Catalog,
    store: &S,
) -> Result<SubmissionResult, ApiError> {
    debug!("submit_draft command");

    let snapshot = draft.snapshot();
    let payload = InvoicePayload::assemble(&snapshot, catalog).map_err(|errors| {
        warn!(
            number = %snapshot.invoice_number,
            invalid_fields = errors.len(),
            "Submission refused: draft is invalid"
        );
        ApiError::from(errors)
    })?;

    let acknowledgement = payload.acknowledgement();
    info!(
        number = %payload.invoice_number,
        customer = %payload.customer_name,
        total = %payload.formatted_total(),
        "Submitting invoice"
    );

    let stored = store.save(payload).await.map_err(|e| {
        error!(number = %snapshot.invoice_number, error = %e, "Failed to save invoice");
        ApiError::from(e)
    })?;

    if !draft.reset_if_unchanged(&snapshot, config, catalog) {
        debug!(number = %snapshot.invoice_number, "Draft edited during save, keeping edits");
    }
    info!(id = %stored.id, number = %stored.invoice.invoice_number, "Invoice created");

    Ok(SubmissionResult {
        invoice_id: stored.id,
        acknowledgement,
        redirect: INVOICES_ROUTE.to_string(),
        invoice: stored.invoice,
    })
}

/// Lists stored invoices for the invoices table.
///
/// ## Arguments
/// * `query` - Search/status filter/page; `None` means first page of everything
pub async fn list_invoices<S: InvoiceStore>(
    store: &S,
    config: &ConfigState,
    query: Option<ListQuery<InvoiceStatus>>,
) -> Result<Page<InvoiceSummary>, ApiError> {
    let query = query.unwrap_or_else(|| ListQuery::new(config.invoice_page_size));
    debug!(search = %query.search, filter = ?query.filter, page = query.page, "list_invoices command");

    let summaries: Vec<InvoiceSummary> = store
        .list()
        .await?
        .iter()
        .map(|stored| stored.summary())
        .collect();

    Ok(list(&summaries, &query).cloned())
}
