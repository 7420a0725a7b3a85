//! # Config Commands
//!
//! Read-only lookups the form needs before it can render.

use tracing::debug;

use invoice_core::Catalog;

use crate::state::ConfigState;

/// Gets the current configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Gets the customer and currency options for the form's dropdowns.
pub fn get_catalog(catalog: &Catalog) -> Catalog {
    debug!("get_catalog command");
    catalog.clone()
}
