//! # Transaction Commands
//!
//! The transactions table: search over description and category, type
//! filter, and the "Total Income", "Total Expenses" and "Net" cards.

use serde::Serialize;
use tracing::debug;

use invoice_core::listing::{list, total_expenses, total_income, TransactionKind};
use invoice_core::{Catalog, ListQuery, Money, Page, TransactionRecord};

use crate::state::ConfigState;

/// One page of transactions plus the header cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub page: Page<TransactionRecord>,
    pub total_income: Money,
    /// Positive magnitude of all expenses
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub net_amount: Money,
    pub formatted_income: String,
    pub formatted_expenses: String,
    pub formatted_net: String,
}

/// Lists `transactions` for the transactions table.
///
/// ## Arguments
/// * `query` - Search/type/page; `None` means first page of everything
pub fn list_transactions(
    config: &ConfigState,
    catalog: &Catalog,
    transactions: &[TransactionRecord],
    query: Option<ListQuery<TransactionKind>>,
) -> TransactionListResponse {
    let query = query.unwrap_or_else(|| ListQuery::new(config.transaction_page_size));
    debug!(search = %query.search, kind = ?query.filter, page = query.page, "list_transactions command");

    let income = total_income(transactions);
    let expenses = total_expenses(transactions);
    let net = income - expenses;

    TransactionListResponse {
        page: list(transactions, &query).cloned(),
        total_income: income,
        total_expenses: expenses,
        net_amount: net,
        formatted_income: config.format_currency(catalog, income),
        formatted_expenses: config.format_currency(catalog, expenses),
        formatted_net: config.format_currency(catalog, net),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::Directory;

    fn sample(query: Option<ListQuery<TransactionKind>>) -> TransactionListResponse {
        let directory = Directory::sample();
        list_transactions(
            &ConfigState::default(),
            &Catalog::sample(),
            &directory.transactions,
            query,
        )
    }

    #[test]
    fn test_first_page_holds_eight_rows() {
        let response = sample(None);

        assert_eq!(response.page.items.len(), 8);
        assert_eq!(response.page.total_pages, 2);
        assert_eq!(response.total_income, Money::from_major(6_900));
        assert_eq!(response.total_expenses, Money::from_major(1_649));
        assert_eq!(response.net_amount, Money::from_major(5_251));
        assert_eq!(response.formatted_net, "₹ 5,251.00");
    }

    #[test]
    fn test_type_filter_and_category_search() {
        let expenses = sample(Some(ListQuery::new(8).filter(TransactionKind::Expense)));
        assert_eq!(expenses.page.total_matches, 5);

        let services = sample(Some(ListQuery::new(8).search("service revenue")));
        let ids: Vec<&str> = services.page.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "7"]);

        // Totals ignore the query
        assert_eq!(services.total_income, Money::from_major(6_900));
    }
}
