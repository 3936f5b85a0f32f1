//! [`ExpenseProvider`] port implementation
//!
//! Method calls below resolve to the inherent operations on
//! [`ConcurClient`], which take precedence over the trait methods.

use async_trait::async_trait;
use travex_common::auth::OAuthClientTrait;
use travex_core::ExpenseProvider;
use travex_domain::{
    Attendee, AttendeeType, ExpenseEntry, ExpenseReport, ExpenseType, Itemization, Location,
    NewAttendee, NewExpense, NewItemization, NewReport, PaymentType, ReceiptImage, ReportImage,
    Result, SubmitReportResult,
};

use super::service::ConcurClient;

#[async_trait]
impl<C: OAuthClientTrait + 'static> ExpenseProvider for ConcurClient<C> {
    async fn list_reports(&self, limit: Option<u32>) -> Result<Vec<ExpenseReport>> {
        self.list_reports(limit).await
    }

    async fn get_report(&self, report_id: &str) -> Result<ExpenseReport> {
        self.get_report(report_id).await
    }

    async fn create_report(&self, report: &NewReport) -> Result<ExpenseReport> {
        self.create_report(report).await
    }

    async fn submit_report(&self, report_id: &str) -> Result<SubmitReportResult> {
        self.submit_report(report_id).await
    }

    async fn list_report_expenses(&self, report_id: &str) -> Result<Vec<ExpenseEntry>> {
        self.list_report_expenses(report_id).await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<String> {
        self.create_expense(expense).await
    }

    async fn delete_expense(&self, report_id: &str, entry_id: &str) -> Result<()> {
        self.delete_expense(report_id, entry_id).await
    }

    async fn list_expense_types(&self) -> Result<Vec<ExpenseType>> {
        self.list_expense_types().await
    }

    async fn list_payment_types(&self) -> Result<Vec<PaymentType>> {
        self.list_payment_types().await
    }

    async fn find_location(&self, city: &str) -> Result<Option<Location>> {
        self.find_location(city).await
    }

    async fn list_attendee_types(&self) -> Result<Vec<AttendeeType>> {
        self.list_attendee_types().await
    }

    async fn create_attendee(&self, attendee: &NewAttendee) -> Result<Attendee> {
        self.create_attendee(attendee).await
    }

    async fn associate_attendees(&self, entry_id: &str, attendee_ids: &[String]) -> Result<()> {
        self.associate_attendees(entry_id, attendee_ids).await
    }

    async fn create_itemization(&self, itemization: &NewItemization) -> Result<Itemization> {
        self.create_itemization(itemization).await
    }

    async fn list_receipts(&self) -> Result<Vec<ReceiptImage>> {
        self.list_receipts().await
    }

    async fn get_report_image(&self, report_id: &str) -> Result<ReportImage> {
        self.get_report_image(report_id).await
    }

    async fn upload_receipt(
        &self,
        entry_id: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<ReceiptImage> {
        self.upload_receipt(entry_id, content_type, data).await
    }
}
