//! In-memory [`ExpenseProvider`] for service tests
//!
//! Records every created expense and can be told to fail the n-th create or
//! every lookup.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use travex_core::ExpenseProvider;
use travex_domain::{
    ApiError, Attendee, AttendeeType, ExpenseEntry, ExpenseReport, ExpenseType, Itemization,
    Location, NewAttendee, NewExpense, NewItemization, NewReport, PaymentType, ReceiptImage,
    ReportImage, ReportStatus, Result as DomainResult, SubmitReportResult, TravexError,
};

fn forbidden(context: &str) -> TravexError {
    ApiError::new(format!("{context} failed: 403 Forbidden"), 403, "Forbidden", None).into()
}

#[derive(Default)]
pub struct InMemoryExpenseProvider {
    pub expense_types: Vec<ExpenseType>,
    pub payment_types: Vec<PaymentType>,
    pub locations: Vec<Location>,
    /// 0-based index of the create call that fails
    pub fail_create_at: Option<usize>,
    pub fail_lookups: bool,
    pub created: Mutex<Vec<NewExpense>>,
    pub location_queries: Mutex<Vec<String>>,
}

impl InMemoryExpenseProvider {
    pub fn with_standard_lookups() -> Self {
        Self {
            expense_types: vec![
                ExpenseType { code: "LODNG".into(), name: "Hotel".into() },
                ExpenseType { code: "PDIEM".into(), name: "Per Diem".into() },
            ],
            payment_types: vec![
                PaymentType { id: "CBCP".into(), name: "Company Card".into(), is_default: true },
                PaymentType { id: "CASH".into(), name: "Cash".into(), is_default: false },
            ],
            locations: vec![Location {
                id: "LOC-NYC".into(),
                name: "New York".into(),
                country_code: Some("US".into()),
                subdivision: Some("US-NY".into()),
            }],
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<NewExpense> {
        self.created.lock().unwrap().clone()
    }

    pub fn location_queries(&self) -> Vec<String> {
        self.location_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExpenseProvider for InMemoryExpenseProvider {
    async fn list_reports(&self, _limit: Option<u32>) -> DomainResult<Vec<ExpenseReport>> {
        Ok(Vec::new())
    }

    async fn get_report(&self, report_id: &str) -> DomainResult<ExpenseReport> {
        Err(TravexError::NotFound(format!("report {report_id}")))
    }

    async fn create_report(&self, report: &NewReport) -> DomainResult<ExpenseReport> {
        Ok(ExpenseReport {
            id: "R-NEW".into(),
            name: report.name.clone(),
            purpose: report.purpose.clone(),
            total: None,
            currency: report.currency.clone(),
            status: ReportStatus::NotSubmitted,
            payment_status: None,
            created: None,
            submitted: None,
        })
    }

    async fn submit_report(&self, report_id: &str) -> DomainResult<SubmitReportResult> {
        Ok(SubmitReportResult {
            report_id: report_id.to_string(),
            status: Some("SUCCESS".into()),
            report_status: None,
            message: None,
        })
    }

    async fn list_report_expenses(&self, _report_id: &str) -> DomainResult<Vec<ExpenseEntry>> {
        Ok(Vec::new())
    }

    async fn create_expense(&self, expense: &NewExpense) -> DomainResult<String> {
        let mut created = self.created.lock().unwrap();
        if self.fail_create_at == Some(created.len()) {
            return Err(ApiError::new(
                "create expense failed: 400 Bad Request: Invalid date",
                400,
                "Bad Request",
                None,
            )
            .into());
        }
        created.push(expense.clone());
        Ok(format!("E{}", created.len()))
    }

    async fn delete_expense(&self, _report_id: &str, _entry_id: &str) -> DomainResult<()> {
        Ok(())
    }

    async fn list_expense_types(&self) -> DomainResult<Vec<ExpenseType>> {
        if self.fail_lookups {
            return Err(forbidden("list expense types"));
        }
        Ok(self.expense_types.clone())
    }

    async fn list_payment_types(&self) -> DomainResult<Vec<PaymentType>> {
        if self.fail_lookups {
            return Err(forbidden("list payment types"));
        }
        Ok(self.payment_types.clone())
    }

    async fn find_location(&self, city: &str) -> DomainResult<Option<Location>> {
        self.location_queries.lock().unwrap().push(city.to_string());
        if self.fail_lookups {
            return Err(forbidden("find location"));
        }
        let needle = city.to_lowercase();
        Ok(self.locations.iter().find(|l| needle.contains(&l.name.to_lowercase())).cloned())
    }

    async fn list_attendee_types(&self) -> DomainResult<Vec<AttendeeType>> {
        Ok(Vec::new())
    }

    async fn create_attendee(&self, attendee: &NewAttendee) -> DomainResult<Attendee> {
        Ok(Attendee {
            id: "A1".into(),
            first_name: Some(attendee.first_name.clone()),
            last_name: Some(attendee.last_name.clone()),
            company: attendee.company.clone(),
            attendee_type_code: None,
        })
    }

    async fn associate_attendees(&self, _entry_id: &str, _ids: &[String]) -> DomainResult<()> {
        Ok(())
    }

    async fn create_itemization(&self, item: &NewItemization) -> DomainResult<Itemization> {
        Ok(Itemization {
            id: "I1".into(),
            entry_id: item.entry_id.clone(),
            expense_type_code: Some(item.expense_type_code.clone()),
            amount: Some(item.amount),
            transaction_date: Some(item.transaction_date.to_string()),
        })
    }

    async fn list_receipts(&self) -> DomainResult<Vec<ReceiptImage>> {
        Ok(Vec::new())
    }

    async fn get_report_image(&self, report_id: &str) -> DomainResult<ReportImage> {
        Ok(ReportImage { report_id: report_id.to_string(), image_id: None, url: None })
    }

    async fn upload_receipt(
        &self,
        _entry_id: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> DomainResult<ReceiptImage> {
        Ok(ReceiptImage { id: "IMG1".into(), url: None })
    }
}
