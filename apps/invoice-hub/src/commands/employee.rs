//! # Employee Commands
//!
//! The employees table: search over name, email and position, department
//! filter, and the "Total Employees", "Active" and "Total Payroll" cards.

use serde::Serialize;
use tracing::debug;

use invoice_core::listing::{active_employees, list, total_payroll};
use invoice_core::{Catalog, EmployeeRecord, ListQuery, Money, Page};

use crate::state::ConfigState;

/// One page of employees plus the header cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    pub page: Page<EmployeeRecord>,
    pub total_employees: usize,
    pub active_employees: usize,
    /// Annual salaries summed over every employee
    pub total_payroll: Money,
    pub formatted_payroll: String,
}

/// Lists `employees` for the employees table.
///
/// ## Arguments
/// * `query` - Search/department/page; `None` means first page of everything
pub fn list_employees(
    config: &ConfigState,
    catalog: &Catalog,
    employees: &[EmployeeRecord],
    query: Option<ListQuery<String>>,
) -> EmployeeListResponse {
    let query = query.unwrap_or_else(|| ListQuery::new(config.employee_page_size));
    debug!(search = %query.search, department = ?query.filter, page = query.page, "list_employees command");

    let payroll = total_payroll(employees);
    EmployeeListResponse {
        page: list(employees, &query).cloned(),
        total_employees: employees.len(),
        active_employees: active_employees(employees),
        total_payroll: payroll,
        formatted_payroll: config.format_currency(catalog, payroll),
    }
}
