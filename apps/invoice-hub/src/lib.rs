//! # Invoice Hub Library
//!
//! Application layer for the invoice creation form: configuration,
//! draft state, the persistence seam and the commands a UI host calls.
//!
//! ## Module Organization
//! ```text
//! invoice_hub/
//! ├── lib.rs          ◄─── You are here (App wiring, tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── ConfigState (defaults → toml → env)
//! │   └── draft.rs    ◄─── DraftState (Arc<Mutex<InvoiceDraft>>)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── draft.rs    ◄─── Form editing commands
//! │   ├── invoice.rs  ◄─── submit_draft, list_invoices
//! │   ├── customer.rs ◄─── list_customers
//! │   ├── employee.rs ◄─── list_employees
//! │   ├── transaction.rs ◄─ list_transactions
//! │   └── config.rs   ◄─── Config and catalog lookups
//! ├── store.rs        ◄─── InvoiceStore trait, MemoryStore
//! └── error.rs        ◄─── ApiError, StoreError, ConfigError
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod store;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use invoice_core::{Catalog, Directory};

use state::{ConfigState, DraftState};
use store::InvoiceStore;

/// Everything a UI host needs to drive the form.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. init_tracing()           RUST_LOG or the default filter             │
/// │  2. ConfigState::from_env()  defaults → config.toml → INVOICE_HUB_*     │
/// │  3. App::new(config, catalog, store)                                    │
/// │        • DraftState: fresh draft dated today                            │
/// │        • Directory: empty until with_directory() supplies records       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct App<S> {
    pub config: ConfigState,
    pub catalog: Catalog,
    pub draft: DraftState,
    /// Records behind the customers, employees and transactions tables
    pub directory: Directory,
    pub store: S,
}

impl<S: InvoiceStore> App<S> {
    pub fn new(config: ConfigState, catalog: Catalog, store: S) -> Self {
        let draft = DraftState::fresh(&config, &catalog);
        info!(
            currency = %config.draft.currency,
            coercion = ?config.coercion,
            customers = catalog.customers.len(),
            "Invoice hub initialized"
        );
        App {
            config,
            catalog,
            draft,
            directory: Directory::default(),
            store,
        }
    }

    /// Supplies the table records.
    pub fn with_directory(mut self, directory: Directory) -> Self {
        info!(
            customers = directory.customers.len(),
            employees = directory.employees.len(),
            transactions = directory.transactions.len(),
            "Directory loaded"
        );
        self.directory = directory;
        self
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=invoice_core=trace` - Trace the core crate only
/// - Default: INFO, DEBUG for invoice crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,invoice_hub=debug,invoice_core=debug"));

    // try_init: a second call (tests, embedding hosts) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
