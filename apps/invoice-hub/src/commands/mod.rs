//! # Commands Module
//!
//! All commands exposed to the UI host.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── draft.rs       ◄─── Form editing: header, rows, discount, shipping
//! ├── invoice.rs     ◄─── Submission and the invoices table
//! ├── customer.rs    ◄─── The customers table
//! ├── employee.rs    ◄─── The employees table
//! ├── transaction.rs ◄─── The transactions table
//! └── config.rs      ◄─── Configuration and catalog lookups
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the draft
//! fn get_draft(draft: &DraftState, catalog: &Catalog)
//!
//! // Needs the coercion policy too
//! fn set_shipping(draft: &DraftState, config: &ConfigState, catalog: &Catalog, raw: &str)
//!
//! // Needs the store
//! async fn submit_draft(draft: &DraftState, config: &ConfigState, catalog: &Catalog, store: &S)
//!
//! // Tables read from the directory
//! fn list_employees(config: &ConfigState, catalog: &Catalog, employees: &[EmployeeRecord], query)
//! ```

pub mod config;
pub mod customer;
pub mod draft;
pub mod employee;
pub mod invoice;
pub mod transaction;
