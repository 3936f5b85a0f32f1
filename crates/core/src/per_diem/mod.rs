//! Per-diem rates and calculation
//!
//! - [`rates`]: the process-wide rate table and location lookup
//! - [`calculator`]: date range → daily breakdown and total
//! - [`batch`]: breakdown → one expense draft per day

pub mod batch;
pub mod calculator;
pub mod rates;

pub use batch::{build_per_diem_expenses, PerDiemExpenseTemplate};
pub use calculator::{parse_trip_date, PerDiemCalculator};
pub use rates::RateTable;
