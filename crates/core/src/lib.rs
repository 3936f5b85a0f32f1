//! # Travex Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The per-diem rate table and calculator
//! - Expense resolution rules and the per-diem batch service
//! - Card charge reconciliation against trips
//! - Port interfaces (traits) implemented by provider integrations
//!
//! ## Architecture Principles
//! - Only depends on `travex-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod expenses;
pub mod per_diem;
pub mod reconciliation;

pub use expenses::ports::ExpenseProvider;
pub use expenses::{
    CreatedExpense, ExpenseDefaults, ExpenseDraft, ExpenseService, PerDiemBatchFailure,
    PerDiemBatchRequest, PerDiemBatchResult,
};
pub use per_diem::{PerDiemCalculator, RateTable};
pub use reconciliation::reconcile_charges;
