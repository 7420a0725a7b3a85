//! # Catalog
//!
//! Read-only reference data the invoice form consumes: the customer list
//! (customer selector, "Bill To" card) and the currency table (currency
//! selector, symbol lookup for amounts).
//!
//! The core never mutates either list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Symbol used when a currency code is not in the table.
pub const FALLBACK_SYMBOL: &str = "$";

// =============================================================================
// Customer
// =============================================================================

/// A customer that can be billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Currency
// =============================================================================

/// An entry of the currency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Currency {
    /// ISO 4217 code.
    pub code: String,
    pub symbol: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Currency {
            code: code.into(),
            symbol: symbol.into(),
        }
    }

    /// Formats an amount the way the invoice summary shows it.
    ///
    /// ```rust
    /// use invoice_core::catalog::Currency;
    /// use invoice_core::money::Money;
    ///
    /// let inr = Currency::new("INR", "₹");
    /// assert_eq!(inr.format(Money::from_major(1180)), "₹ 1,180.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        format_with_symbol(&self.symbol, amount)
    }
}

/// `"{symbol} {grouped amount}"`.
pub fn format_with_symbol(symbol: &str, amount: Money) -> String {
    format!("{} {}", symbol, amount.format_grouped())
}

// =============================================================================
// Catalog
// =============================================================================

/// Customers and currencies available to the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    pub customers: Vec<Customer>,
    pub currencies: Vec<Currency>,
}

impl Catalog {
    pub fn new(customers: Vec<Customer>, currencies: Vec<Currency>) -> Self {
        Catalog {
            customers,
            currencies,
        }
    }

    /// The built-in directory used until a real customer source is wired in.
    pub fn sample() -> Self {
        Catalog {
            customers: vec![
                Customer::new("c1", "ABC Corporation", "admin@abc.com"),
                Customer::new("c2", "XYZ Ltd", "billing@xyz.com"),
                Customer::new("c3", "Tech Solutions", "accounts@techsol.com"),
            ],
            currencies: vec![
                Currency::new("USD", "$"),
                Currency::new("EUR", "€"),
                Currency::new("INR", "₹"),
            ],
        }
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Symbol for a currency code, falling back to `$` for unknown codes.
    pub fn currency_symbol(&self, code: &str) -> &str {
        self.currency(code)
            .map(|c| c.symbol.as_str())
            .unwrap_or(FALLBACK_SYMBOL)
    }

    /// First customer, preselected on a fresh draft.
    pub fn default_customer(&self) -> Option<&Customer> {
        self.customers.first()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
