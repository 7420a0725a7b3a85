//! # Customer Commands
//!
//! The customers table: search over name and email, status filter, and the
//! "Total Customers", "Active Customers" and "Total Revenue" header cards.

use serde::Serialize;
use tracing::debug;

use invoice_core::listing::{count_matching, list, total_revenue, CustomerStatus};
use invoice_core::{Catalog, CustomerRecord, ListQuery, Money, Page};

use crate::state::ConfigState;

/// One page of customers plus the header cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListResponse {
    pub page: Page<CustomerRecord>,
    pub total_customers: usize,
    pub active_customers: usize,
    pub total_revenue: Money,
    /// `total_revenue` in the configured currency
    pub formatted_revenue: String,
}

/// Lists `customers` for the customers table.
///
/// Header cards cover every customer, not just the matching page.
///
/// ## Arguments
/// * `query` - Search/status filter/page; `None` means first page of everything
pub fn list_customers(
    config: &ConfigState,
    catalog: &Catalog,
    customers: &[CustomerRecord],
    query: Option<ListQuery<CustomerStatus>>,
) -> CustomerListResponse {
    let query = query.unwrap_or_else(|| ListQuery::new(config.customer_page_size));
    debug!(search = %query.search, filter = ?query.filter, page = query.page, "list_customers command");

    let revenue = total_revenue(customers);
    CustomerListResponse {
        page: list(customers, &query).cloned(),
        total_customers: customers.len(),
        active_customers: count_matching(customers, &CustomerStatus::Active),
        total_revenue: revenue,
        formatted_revenue: config.format_currency(catalog, revenue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::Directory;

    fn customer(id: usize, status: CustomerStatus) -> CustomerRecord {
        CustomerRecord {
            id: id.to_string(),
            name: format!("Customer {}", id),
            email: format!("billing{}@example.com", id),
            phone: "+1 (555) 000-0000".to_string(),
            address: "1 Main St".to_string(),
            status,
            total_invoices: 1,
            total_paid: Money::from_major(100),
            last_invoice: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_default_query_uses_configured_page_size() {
        let customers: Vec<CustomerRecord> = (1..=7)
            .map(|i| {
                let status = if i % 3 == 0 {
                    CustomerStatus::Inactive
                } else {
                    CustomerStatus::Active
                };
                customer(i, status)
            })
            .collect();

        let response = list_customers(&ConfigState::default(), &Catalog::sample(), &customers, None);
        assert_eq!(response.page.items.len(), 5);
        assert_eq!(response.page.total_pages, 2);
        assert_eq!(response.total_customers, 7);
        assert_eq!(response.active_customers, 5);
        assert_eq!(response.total_revenue, Money::from_major(700));
    }

    #[test]
    fn test_search_by_email() {
        let customers = vec![
            customer(1, CustomerStatus::Active),
            customer(2, CustomerStatus::Inactive),
        ];
        let query = ListQuery::new(5).search("BILLING2@");

        let response =
            list_customers(&ConfigState::default(), &Catalog::sample(), &customers, Some(query));
        assert_eq!(response.page.total_matches, 1);
        assert_eq!(response.page.items[0].id, "2");
    }

    #[test]
    fn test_revenue_covers_all_customers_not_just_the_page() {
        let directory = Directory::sample();
        let query = ListQuery::new(5).filter(CustomerStatus::Inactive);

        let response = list_customers(
            &ConfigState::default(),
            &Catalog::sample(),
            &directory.customers,
            Some(query),
        );
        assert_eq!(response.page.total_matches, 1);
        assert_eq!(response.total_revenue, Money::from_major(173_750));
        assert_eq!(response.formatted_revenue, "₹ 173,750.00");
    }
}
