//! # Directory
//!
//! Records behind the customers, employees and transactions tables.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Directory                                                              │
//! │  ├── customers     ──► CustomerRecord     (filter: status)             │
//! │  ├── employees     ──► EmployeeRecord     (filter: department)         │
//! │  └── transactions  ──► TransactionRecord  (filter: type)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::listing::{
    CustomerRecord, CustomerStatus, EmployeeRecord, EmployeeStatus, TransactionKind,
    TransactionRecord,
};
use crate::money::Money;

/// Table data for the management screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    #[serde(default)]
    pub customers: Vec<CustomerRecord>,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

impl Directory {
    /// The built-in records shown until a real data source is wired in.
    pub fn sample() -> Self {
        Directory {
            customers: sample_customers(),
            employees: sample_employees(),
            transactions: sample_transactions(),
        }
    }
}

fn customer(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    status: CustomerStatus,
    (total_invoices, total_paid, last_invoice): (u32, i64, &str),
) -> CustomerRecord {
    CustomerRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        status,
        total_invoices,
        total_paid: Money::from_major(total_paid),
        last_invoice: last_invoice.to_string(),
    }
}

fn sample_customers() -> Vec<CustomerRecord> {
    use CustomerStatus::*;
    vec![
        customer(
            1,
            "ABC Corporation",
            "admin@abc.com",
            "+1 (555) 123-4567",
            "123 Business Ave, City, ST 12345",
            Active,
            (15, 25_000, "2024-01-15"),
        ),
        customer(
            2,
            "XYZ Ltd",
            "billing@xyz.com",
            "+1 (555) 987-6543",
            "456 Commerce St, City, ST 67890",
            Active,
            (8, 12_800, "2024-01-14"),
        ),
        customer(
            3,
            "Tech Solutions",
            "accounts@techsol.com",
            "+1 (555) 456-7890",
            "789 Tech Blvd, City, ST 11111",
            Active,
            (22, 45_600, "2024-01-13"),
        ),
        customer(
            4,
            "StartupCo",
            "finance@startup.com",
            "+1 (555) 321-6547",
            "321 Innovation Way, City, ST 22222",
            Inactive,
            (3, 2_850, "2024-01-10"),
        ),
        customer(
            5,
            "Enterprise Inc",
            "pay@enterprise.com",
            "+1 (555) 789-1234",
            "654 Corporate Dr, City, ST 33333",
            Active,
            (35, 87_500, "2024-01-09"),
        ),
    ]
}

fn employee(
    id: u32,
    name: &str,
    phone: &str,
    (department, position): (&str, &str),
    salary: i64,
    status: EmployeeStatus,
    (join_date, leave_balance): (&str, u32),
) -> EmployeeRecord {
    EmployeeRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        salary: Money::from_major(salary),
        status,
        join_date: join_date.to_string(),
        leave_balance,
    }
}

fn sample_employees() -> Vec<EmployeeRecord> {
    use EmployeeStatus::*;
    vec![
        employee(
            1,
            "John Smith",
            "+1 (555) 123-4567",
            ("Sales", "Sales Manager"),
            85_000,
            Active,
            ("2022-03-15", 15),
        ),
        employee(
            2,
            "Sarah Johnson",
            "+1 (555) 987-6543",
            ("Marketing", "Marketing Specialist"),
            65_000,
            Active,
            ("2023-01-20", 12),
        ),
        employee(
            3,
            "Mike Davis",
            "+1 (555) 456-7890",
            ("IT", "Software Developer"),
            95_000,
            Active,
            ("2021-08-10", 8),
        ),
        employee(
            4,
            "Emily Brown",
            "+1 (555) 321-6547",
            ("HR", "HR Coordinator"),
            55_000,
            OnLeave,
            ("2022-11-05", 20),
        ),
        employee(
            5,
            "David Wilson",
            "+1 (555) 789-1234",
            ("Finance", "Accountant"),
            70_000,
            Active,
            ("2023-05-18", 18),
        ),
    ]
}

fn sample_transactions() -> Vec<TransactionRecord> {
    use TransactionKind::*;
    let rows = [
        (Income, "Payment from ABC Corp", "Invoice Payment", 2_500, "2024-01-15", "Business Checking"),
        (Expense, "Office Supplies", "Office Expenses", -150, "2024-01-14", "Business Checking"),
        (Income, "Consulting Services", "Service Revenue", 1_800, "2024-01-13", "Business Savings"),
        (Expense, "Software License", "Technology", -299, "2024-01-12", "Business Credit"),
        (Income, "Product Sale", "Product Revenue", 650, "2024-01-11", "Business Checking"),
        (Expense, "Marketing Campaign", "Marketing", -500, "2024-01-10", "Business Checking"),
        (Income, "Freelance Project", "Service Revenue", 1_200, "2024-01-09", "Business Savings"),
        (Expense, "Utility Bills", "Utilities", -280, "2024-01-08", "Business Checking"),
        (Income, "Investment Returns", "Investment", 750, "2024-01-07", "Investment Account"),
        (Expense, "Travel Expenses", "Travel", -420, "2024-01-06", "Business Credit"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (kind, description, category, amount, date, account))| TransactionRecord {
            id: (i + 1).to_string(),
            kind,
            description: description.to_string(),
            category: category.to_string(),
            amount: Money::from_major(amount),
            date: date.to_string(),
            account: account.to_string(),
        })
        .collect()
}
