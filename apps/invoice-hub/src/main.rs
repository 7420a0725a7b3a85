//! # Invoice Hub Entry Point
//!
//! Headless runner: submits one invoice and prints the outcome as JSON.
//!
//! ```text
//! invoice-hub                 submit a fresh default draft
//! invoice-hub draft.json      submit the draft in draft.json
//! invoice-hub tables          print the first page of every table
//! ```
//!
//! Exit status is 0 when the invoice was created, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;

use invoice_core::{Catalog, Directory, InvoiceDraft};
use invoice_hub::commands::customer::list_customers;
use invoice_hub::commands::employee::list_employees;
use invoice_hub::commands::invoice::submit_draft;
use invoice_hub::commands::transaction::list_transactions;
use invoice_hub::state::ConfigState;
use invoice_hub::store::MemoryStore;
use invoice_hub::{init_tracing, App};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting Invoice Hub");

    let config = ConfigState::from_env();
    let app = App::new(config, Catalog::sample(), MemoryStore::new())
        .with_directory(Directory::sample());

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("tables") {
        let (config, catalog, directory) = (&app.config, &app.catalog, &app.directory);
        let tables = serde_json::json!({
            "customers": list_customers(config, catalog, &directory.customers, None),
            "employees": list_employees(config, catalog, &directory.employees, None),
            "transactions": list_transactions(config, catalog, &directory.transactions, None),
        });
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = arg.map(PathBuf::from) {
        info!(?path, "Loading draft from file");
        let contents = std::fs::read_to_string(&path)?;
        let draft: InvoiceDraft = serde_json::from_str(&contents)?;
        app.draft.replace(draft);
    }

    let outcome = submit_draft(&app.draft, &app.config, &app.catalog, &app.store).await;

    match outcome {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
