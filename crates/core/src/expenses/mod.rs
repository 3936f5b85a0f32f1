//! Expense workflows
//!
//! - [`ports`]: provider interface
//! - [`resolution`]: expense/payment type matching
//! - [`service`]: expense creation and per-diem batches

pub mod ports;
pub mod resolution;
pub mod service;

pub use ports::ExpenseProvider;
pub use resolution::{resolve_expense_type, resolve_payment_type};
pub use service::{
    CreatedExpense, ExpenseDefaults, ExpenseDraft, ExpenseService, PerDiemBatchFailure,
    PerDiemBatchRequest, PerDiemBatchResult,
};
