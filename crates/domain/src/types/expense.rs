//! Expense report, entry, attendee and receipt models
//!
//! These are the provider-neutral shapes handed to and returned from the
//! tool layer. Wire formats for each API generation live in the infra crate
//! and are converted into these at the boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Approval state of an expense report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    NotSubmitted,
    Pending,
    Approved,
    SentBack,
    Unknown,
}

impl_domain_enum_conversions!(ReportStatus {
    NotSubmitted => "not_submitted",
    Pending => "pending",
    Approved => "approved",
    SentBack => "sent_back",
    Unknown => "unknown",
});

impl ReportStatus {
    /// Map a provider approval status code (`A_NOTF`, `A_PEND`, ...).
    #[must_use]
    pub fn from_approval_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "A_NOTF" => Self::NotSubmitted,
            "A_PEND" | "A_PVAL" | "A_FILE" => Self::Pending,
            "A_APPR" | "A_EXTV" | "A_TEXP" => Self::Approved,
            "A_RESU" | "A_RHLD" => Self::SentBack,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReport {
    pub id: String,
    pub name: String,
    pub purpose: Option<String>,
    pub total: Option<f64>,
    pub currency: Option<String>,
    pub status: ReportStatus,
    pub payment_status: Option<String>,
    pub created: Option<String>,
    pub submitted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub name: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Outcome of submitting a report for approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportResult {
    pub report_id: String,
    pub status: Option<String>,
    pub report_status: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: String,
    pub report_id: Option<String>,
    pub expense_type_code: Option<String>,
    pub expense_type_name: Option<String>,
    pub transaction_date: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub business_purpose: Option<String>,
    pub vendor: Option<String>,
}

/// Input for creating an expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub report_id: String,
    pub expense_type_code: String,
    pub transaction_date: NaiveDate,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub payment_type_id: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub business_purpose: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseType {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentType {
    pub id: String,
    pub name: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub country_code: Option<String>,
    pub subdivision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeType {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendee {
    pub attendee_type_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub attendee_type_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemization {
    pub report_id: String,
    pub entry_id: String,
    pub expense_type_code: String,
    pub transaction_date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itemization {
    pub id: String,
    pub entry_id: String,
    pub expense_type_code: Option<String>,
    pub amount: Option<f64>,
    pub transaction_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptImage {
    pub id: String,
    pub url: Option<String>,
}

/// Combined receipt image of a whole report, as exposed by the legacy image
/// endpoint. Missing fields mean the provider did not return them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportImage {
    pub report_id: String,
    pub image_id: Option<String>,
    pub url: Option<String>,
}
