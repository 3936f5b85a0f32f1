//! Expense provider port
//!
//! Implemented by provider integrations (the Concur client in
//! `travex-infra`). Every method surfaces provider failures unmodified as
//! [`travex_domain::TravexError`].

use async_trait::async_trait;
use travex_domain::{
    Attendee, AttendeeType, ExpenseEntry, ExpenseReport, ExpenseType, Itemization, Location,
    NewAttendee, NewExpense, NewItemization, NewReport, PaymentType, ReceiptImage, ReportImage,
    Result, SubmitReportResult,
};

/// Expense report operations offered by a provider
#[async_trait]
pub trait ExpenseProvider: Send + Sync {
    // Reports
    async fn list_reports(&self, limit: Option<u32>) -> Result<Vec<ExpenseReport>>;

    async fn get_report(&self, report_id: &str) -> Result<ExpenseReport>;

    async fn create_report(&self, report: &NewReport) -> Result<ExpenseReport>;

    /// Submit a report for approval
    async fn submit_report(&self, report_id: &str) -> Result<SubmitReportResult>;

    // Expense entries
    async fn list_report_expenses(&self, report_id: &str) -> Result<Vec<ExpenseEntry>>;

    /// Create an entry and return its id
    async fn create_expense(&self, expense: &NewExpense) -> Result<String>;

    async fn delete_expense(&self, report_id: &str, entry_id: &str) -> Result<()>;

    // Lookups used to resolve identifiers before creating entries
    async fn list_expense_types(&self) -> Result<Vec<ExpenseType>>;

    async fn list_payment_types(&self) -> Result<Vec<PaymentType>>;

    /// First location matching a city name, if any
    async fn find_location(&self, city: &str) -> Result<Option<Location>>;

    // Attendees and itemizations
    async fn list_attendee_types(&self) -> Result<Vec<AttendeeType>>;

    async fn create_attendee(&self, attendee: &NewAttendee) -> Result<Attendee>;

    async fn associate_attendees(&self, entry_id: &str, attendee_ids: &[String]) -> Result<()>;

    async fn create_itemization(&self, itemization: &NewItemization) -> Result<Itemization>;

    // Receipts
    async fn list_receipts(&self) -> Result<Vec<ReceiptImage>>;

    async fn get_report_image(&self, report_id: &str) -> Result<ReportImage>;

    /// Attach image bytes to an expense entry
    async fn upload_receipt(
        &self,
        entry_id: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ReceiptImage>;
}
