//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Lowest priority first:                                                 │
//! │                                                                         │
//! │  1. Defaults (this file)                                                │
//! │  2. config.toml                                                         │
//! │       $INVOICE_HUB_CONFIG, or                                           │
//! │       ~/.config/invoice-hub/config.toml (Linux)                         │
//! │       ~/Library/Application Support/com.invoicehub.invoice-hub (macOS)  │
//! │  3. Environment variables (INVOICE_HUB_*)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! coercion = "strict"
//! invoicePageSize = 10
//! transactionPageSize = 12
//!
//! [draft]
//! invoicePrefix = "ACME-"
//! dueInDays = 30
//! currency = "USD"
//! terms = "Net 30"
//! ```
//!
//! Read-only after startup, so no lock.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use invoice_core::listing::{
    CUSTOMER_PAGE_SIZE, EMPLOYEE_PAGE_SIZE, INVOICE_PAGE_SIZE, TRANSACTION_PAGE_SIZE,
};
use invoice_core::{Catalog, CoercionPolicy, DraftDefaults, Money};

use crate::error::ConfigError;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// Values a fresh draft starts from
    pub draft: DraftDefaults,

    /// Handling of unreadable numeric form input
    pub coercion: CoercionPolicy,

    /// Rows per page on the invoices table
    pub invoice_page_size: usize,

    /// Rows per page on the customers table
    pub customer_page_size: usize,

    /// Rows per page on the employees table
    pub employee_page_size: usize,

    /// Rows per page on the transactions table
    pub transaction_page_size: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            draft: DraftDefaults::default(),
            coercion: CoercionPolicy::Lenient,
            invoice_page_size: INVOICE_PAGE_SIZE,
            customer_page_size: CUSTOMER_PAGE_SIZE,
            employee_page_size: EMPLOYEE_PAGE_SIZE,
            transaction_page_size: TRANSACTION_PAGE_SIZE,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the file (if any) and the environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Like [`load`](Self::load), falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Loads from `$INVOICE_HUB_CONFIG` (or the platform path) and the environment.
    pub fn from_env() -> Self {
        Self::load_or_default(std::env::var("INVOICE_HUB_CONFIG").ok().map(PathBuf::from))
    }

    /// Applies `INVOICE_HUB_*` overrides read through `lookup`.
    ///
    /// ## Variables
    /// - `INVOICE_HUB_PREFIX`: invoice number prefix
    /// - `INVOICE_HUB_CURRENCY`: default currency code
    /// - `INVOICE_HUB_DUE_DAYS`: days until due
    /// - `INVOICE_HUB_STRICT_INPUT`: `true`/`1` for strict coercion
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup("INVOICE_HUB_PREFIX") {
            self.draft.invoice_prefix = prefix;
        }

        if let Some(currency) = lookup("INVOICE_HUB_CURRENCY") {
            self.draft.currency = currency.trim().to_uppercase();
        }

        if let Some(days) = lookup("INVOICE_HUB_DUE_DAYS") {
            match days.trim().parse::<u32>() {
                Ok(days) => self.draft.due_in_days = days,
                Err(_) => warn!(value = %days, "Ignoring invalid INVOICE_HUB_DUE_DAYS"),
            }
        }

        if let Some(strict) = lookup("INVOICE_HUB_STRICT_INPUT") {
            self.coercion = match strict.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => CoercionPolicy::Strict,
                _ => CoercionPolicy::Lenient,
            };
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draft.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".to_string()));
        }
        let page_sizes = [
            self.invoice_page_size,
            self.customer_page_size,
            self.employee_page_size,
            self.transaction_page_size,
        ];
        if page_sizes.contains(&0) {
            return Err(ConfigError::Invalid("page sizes must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Formats `amount` in the configured default currency, e.g. `"₹ 1,180.00"`.
    ///
    /// Used for the table header cards, which are not tied to one draft.
    pub fn format_currency(&self, catalog: &Catalog, amount: Money) -> String {
        let symbol = catalog.currency_symbol(&self.draft.currency);
        invoice_core::catalog::format_with_symbol(symbol, amount)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "invoicehub", "invoice-hub")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
