//! # Invoice Store
//!
//! The persistence seam a submitted invoice is handed to.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_draft ──► InvoiceStore::save(payload).await                    │
//! │                          │                                              │
//! │            ┌─────────────┴──────────────┐                               │
//! │            ▼                            ▼                               │
//! │      MemoryStore                  (remote backend)                      │
//! │      tokio Mutex<Vec>             implements the same trait             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `save` is the only await point of a submission.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use invoice_core::{InvoicePayload, InvoiceStatus, InvoiceSummary};

use crate::error::StoreError;

/// An invoice as recorded by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredInvoice {
    pub id: Uuid,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub invoice: InvoicePayload,
}

impl StoredInvoice {
    /// Wraps a freshly submitted payload. New invoices are `Pending`.
    pub fn new(invoice: InvoicePayload) -> Self {
        StoredInvoice {
            id: Uuid::new_v4(),
            status: InvoiceStatus::Pending,
            created_at: Utc::now(),
            invoice,
        }
    }

    /// Row for the invoices table.
    pub fn summary(&self) -> InvoiceSummary {
        self.invoice.summary(self.status)
    }
}

/// Where submitted invoices go.
pub trait InvoiceStore: Send + Sync {
    /// Persists `invoice` and returns the stored record.
    fn save(
        &self,
        invoice: InvoicePayload,
    ) -> impl Future<Output = Result<StoredInvoice, StoreError>> + Send;

    /// All stored invoices, oldest first.
    fn list(&self) -> impl Future<Output = Result<Vec<StoredInvoice>, StoreError>> + Send;
}

/// In-process store. Rejects a second invoice with the same number.
#[derive(Debug, Default)]
pub struct MemoryStore {
    invoices: Mutex<Vec<StoredInvoice>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvoiceStore for MemoryStore {
    async fn save(&self, invoice: InvoicePayload) -> Result<StoredInvoice, StoreError> {
        let mut invoices = self.invoices.lock().await;

        if invoices
            .iter()
            .any(|s| s.invoice.invoice_number == invoice.invoice_number)
        {
            return Err(StoreError::Duplicate {
                invoice_number: invoice.invoice_number,
            });
        }

        let stored = StoredInvoice::new(invoice);
        debug!(id = %stored.id, number = %stored.invoice.invoice_number, "Stored invoice");
        invoices.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
        Ok(self.invoices.lock().await.clone())
    }
}
