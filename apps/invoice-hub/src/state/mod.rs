//! # State Module
//!
//! Application state for the invoice form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   ConfigState    │  │   DraftState     │  │   Catalog            │  │
//! │  │                  │  │                  │  │   (invoice-core)     │  │
//! │  │  draft defaults  │  │  Arc<Mutex<      │  │  customers           │  │
//! │  │  coercion policy │  │   InvoiceDraft   │  │  currencies          │  │
//! │  │  page sizes      │  │  >>              │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │   read-only             locked per edit       read-only                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

mod config;
mod draft;

pub use config::ConfigState;
pub use draft::DraftState;
