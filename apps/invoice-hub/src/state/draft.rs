//! # Draft State
//!
//! The invoice currently open in the creation form.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use tracing::debug;

use invoice_core::draft::generate_invoice_number;
use invoice_core::{Catalog, InvoiceDraft};

use super::ConfigState;

/// Shared handle to the active draft.
///
/// ## Thread Safety
/// `Arc<Mutex<InvoiceDraft>>`: every edit runs under the lock. Commands
/// never hold the lock across an `.await`; submission clones the draft
/// first.
#[derive(Debug, Clone)]
pub struct DraftState {
    draft: Arc<Mutex<InvoiceDraft>>,
}

impl DraftState {
    pub fn new(draft: InvoiceDraft) -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(draft)),
        }
    }

    /// A fresh draft dated today with a random invoice number.
    pub fn fresh(config: &ConfigState, catalog: &Catalog) -> Self {
        Self::new(fresh_draft(config, catalog))
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = draft_state.with_draft(|d| d.totals());
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDraft) -> R,
    {
        // A panic mid-edit leaves a draft that is still a valid value
        let draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDraft) -> R,
    {
        let mut draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut draft)
    }

    /// Clone of the current draft.
    pub fn snapshot(&self) -> InvoiceDraft {
        self.with_draft(InvoiceDraft::clone)
    }

    /// Replaces the draft with `draft`.
    pub fn replace(&self, draft: InvoiceDraft) {
        debug!(number = %draft.invoice_number, "Replacing active draft");
        self.with_draft_mut(|d| *d = draft);
    }

    /// Replaces the draft with a fresh one.
    pub fn reset(&self, config: &ConfigState, catalog: &Catalog) {
        self.replace(fresh_draft(config, catalog));
    }

    /// Replaces the draft with a fresh one only if it still equals
    /// `expected`. Returns whether the reset happened.
    ///
    /// Edits made after `expected` was taken are kept.
    pub fn reset_if_unchanged(
        &self,
        expected: &InvoiceDraft,
        config: &ConfigState,
        catalog: &Catalog,
    ) -> bool {
        let fresh = fresh_draft(config, catalog);
        self.with_draft_mut(|d| {
            if *d == *expected {
                debug!(number = %fresh.invoice_number, "Replacing active draft");
                *d = fresh;
                true
            } else {
                false
            }
        })
    }
}

fn fresh_draft(config: &ConfigState, catalog: &Catalog) -> InvoiceDraft {
    InvoiceDraft::new(
        &config.draft,
        catalog,
        Local::now().date_naive(),
        generate_invoice_number(&config.draft.invoice_prefix),
    )
}
