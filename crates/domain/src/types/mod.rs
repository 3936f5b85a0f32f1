//! Domain types and models

pub mod credentials;
pub mod expense;
pub mod per_diem;
pub mod travel;

pub use credentials::Credentials;
pub use expense::{
    Attendee, AttendeeType, ExpenseEntry, ExpenseReport, ExpenseType, Itemization, Location,
    NewAttendee, NewExpense, NewItemization, NewReport, PaymentType, ReceiptImage, ReportImage,
    ReportStatus, SubmitReportResult,
};
pub use per_diem::{DayType, PerDiemCalculation, PerDiemDayDetail, PerDiemRate};
pub use travel::{CardCharge, ChargeMatch, Reconciliation, Trip, TripTotal};
