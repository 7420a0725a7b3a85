//! # Listing
//!
//! Search, dropdown filter and pagination for the management tables
//! (invoices, customers, employees, transactions), plus the header-card
//! aggregates each table shows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  records ──► search (case-insensitive substring, any search field)     │
//! │          ──► filter (all | exact match on the dropdown column)         │
//! │          ──► page p of ceil(matches / per_page)                        │
//! │                                                                         │
//! │  "Invoices (5)"  = total_matches                                       │
//! │  "Showing 1 to 5 of 7" = showing_from / showing_to / total_matches     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Rows per page on the invoices table.
pub const INVOICE_PAGE_SIZE: usize = 6;

/// Rows per page on the customers table.
pub const CUSTOMER_PAGE_SIZE: usize = 5;

/// Rows per page on the employees table.
pub const EMPLOYEE_PAGE_SIZE: usize = 5;

/// Rows per page on the transactions table.
pub const TRANSACTION_PAGE_SIZE: usize = 8;

// =============================================================================
// Listable
// =============================================================================

/// A table row that can be searched and narrowed by its dropdown column
/// (status for invoices and customers, department for employees, type for
/// transactions).
pub trait Listable {
    type Filter: PartialEq;

    /// Fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against [`ListQuery::filter`].
    fn filter_key(&self) -> &Self::Filter;
}

/// Table query. `filter: None` means the dropdown's "All" entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery<F> {
    #[serde(default)]
    pub search: String,
    pub filter: Option<F>,
    /// 1-based.
    #[serde(default = "first_page")]
    pub page: usize,
    pub per_page: usize,
}

fn first_page() -> usize {
    1
}

impl<F> ListQuery<F> {
    /// First page, no search, no filter.
    pub fn new(per_page: usize) -> Self {
        ListQuery {
            search: String::new(),
            filter: None,
            page: 1,
            per_page,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn filter(mut self, key: F) -> Self {
        self.filter = Some(key);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_matches: usize,
    pub total_pages: usize,
    /// 1-based index of the first row shown, 0 when the page is empty.
    pub showing_from: usize,
    pub showing_to: usize,
}

impl<T: Clone> Page<&T> {
    pub fn cloned(self) -> Page<T> {
        Page {
            items: self.items.into_iter().cloned().collect(),
            page: self.page,
            per_page: self.per_page,
            total_matches: self.total_matches,
            total_pages: self.total_pages,
            showing_from: self.showing_from,
            showing_to: self.showing_to,
        }
    }
}

/// Filters `records` by `query` and returns the requested page.
pub fn list<'a, T: Listable>(records: &'a [T], query: &ListQuery<T::Filter>) -> Page<&'a T> {
    let needle = query.search.trim().to_lowercase();
    let per_page = query.per_page.max(1);
    let page = query.page.max(1);

    let matches: Vec<&T> = records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle))
        })
        .filter(|r| query.filter.as_ref().map_or(true, |k| r.filter_key() == k))
        .collect();

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page);

    let items: Vec<&T> = matches.into_iter().skip(start).take(per_page).collect();
    let (showing_from, showing_to) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, start + items.len())
    };

    Page {
        items,
        page,
        per_page,
        total_matches,
        total_pages,
        showing_from,
        showing_to,
    }
}

/// Number of records whose filter column equals `key` (header cards such
/// as "Active Customers").
pub fn count_matching<T: Listable>(records: &[T], key: &T::Filter) -> usize {
    records.iter().filter(|r| r.filter_key() == key).count()
}

// =============================================================================
// Invoices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Draft,
}

/// Row of the invoices table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    /// Invoice number.
    pub id: String,
    pub client: String,
    pub email: String,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub date: String,
    pub due_date: String,
}

impl Listable for InvoiceSummary {
    type Filter = InvoiceStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.client.as_str(), self.id.as_str()]
    }

    fn filter_key(&self) -> &InvoiceStatus {
        &self.status
    }
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// Row of the customers table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: CustomerStatus,
    pub total_invoices: u32,
    pub total_paid: Money,
    pub last_invoice: String,
}

impl Listable for CustomerRecord {
    type Filter = CustomerStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn filter_key(&self) -> &CustomerStatus {
        &self.status
    }
}

/// "Total Revenue": sum of `total_paid` over every customer.
pub fn total_revenue(customers: &[CustomerRecord]) -> Money {
    customers.iter().map(|c| c.total_paid).sum()
}

// =============================================================================
// Employees
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

/// Row of the employees table. Filtered by department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    /// Annual salary.
    pub salary: Money,
    pub status: EmployeeStatus,
    pub join_date: String,
    /// Remaining leave days.
    pub leave_balance: u32,
}

impl Listable for EmployeeRecord {
    type Filter = String;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.position.as_str()]
    }

    fn filter_key(&self) -> &String {
        &self.department
    }
}

/// "Active Employees": employees not on leave and not inactive.
pub fn active_employees(employees: &[EmployeeRecord]) -> usize {
    employees
        .iter()
        .filter(|e| e.status == EmployeeStatus::Active)
        .count()
}

/// "Total Payroll": sum of annual salaries over every employee.
pub fn total_payroll(employees: &[EmployeeRecord]) -> Money {
    employees.iter().map(|e| e.salary).sum()
}

// =============================================================================
// Transactions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Row of the transactions table. Expenses carry a negative amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub amount: Money,
    pub date: String,
    pub account: String,
}

impl Listable for TransactionRecord {
    type Filter = TransactionKind;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.category.as_str()]
    }

    fn filter_key(&self) -> &TransactionKind {
        &self.kind
    }
}

fn sum_of_kind(transactions: &[TransactionRecord], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// "Total Income": sum of income amounts.
pub fn total_income(transactions: &[TransactionRecord]) -> Money {
    sum_of_kind(transactions, TransactionKind::Income)
}

/// "Total Expenses": magnitude of the summed expense amounts.
pub fn total_expenses(transactions: &[TransactionRecord]) -> Money {
    sum_of_kind(transactions, TransactionKind::Expense).abs()
}

// =============================================================================
// Unit Tests
// =============================================================================
