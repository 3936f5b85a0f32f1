//! Wire shapes per Concur API generation
//!
//! Decoded at the boundary and converted into domain types right away. All
//! fields a response may omit are optional.

use serde::{Deserialize, Serialize};
use travex_domain::{
    AttendeeType, ExpenseEntry, ExpenseReport, ExpenseType, Location, PaymentType, ReceiptImage,
    ReportStatus,
};

/* -------------------------------------------------------------------------- */
/* v3.0 (JSON, PascalCase) */
/* -------------------------------------------------------------------------- */

pub mod v3 {
    use super::{Deserialize, Serialize};

    /// Paged list envelope.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Page<T> {
        #[serde(default = "Vec::new")]
        pub items: Vec<T>,
        #[serde(default)]
        pub next_page: Option<String>,
    }

    /// Response to a create call.
    #[derive(Debug, Clone, Deserialize)]
    pub struct Created {
        #[serde(rename = "ID")]
        pub id: String,
        #[serde(rename = "URI", default)]
        pub uri: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Report {
        #[serde(rename = "ID")]
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default, alias = "BusinessPurpose")]
        pub purpose: Option<String>,
        #[serde(default)]
        pub total: Option<f64>,
        #[serde(default)]
        pub currency_code: Option<String>,
        #[serde(default)]
        pub approval_status_code: Option<String>,
        #[serde(default)]
        pub payment_status_name: Option<String>,
        #[serde(default)]
        pub create_date: Option<String>,
        #[serde(default)]
        pub submit_date: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct ReportCreate {
        pub name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub purpose: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub comment: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub currency_code: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct EntryCreate {
        #[serde(rename = "ReportID")]
        pub report_id: String,
        pub expense_type_code: String,
        pub transaction_date: String,
        pub transaction_amount: f64,
        pub transaction_currency_code: String,
        #[serde(rename = "PaymentTypeID", skip_serializing_if = "Option::is_none")]
        pub payment_type_id: Option<String>,
        #[serde(rename = "LocationID", skip_serializing_if = "Option::is_none")]
        pub location_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub business_purpose: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vendor_description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub comment: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct GroupConfiguration {
        #[serde(default)]
        pub payment_types: Vec<PaymentType>,
        #[serde(default)]
        pub policies: Vec<Policy>,
        #[serde(default)]
        pub expense_types: Vec<ExpenseType>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Policy {
        #[serde(default)]
        pub is_default: bool,
        #[serde(default)]
        pub expense_types: Vec<ExpenseType>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct ExpenseType {
        pub code: String,
        #[serde(default)]
        pub name: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct PaymentType {
        #[serde(rename = "ID")]
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub is_default: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Location {
        #[serde(rename = "ID")]
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default, alias = "Country")]
        pub country_code: Option<String>,
        #[serde(default, alias = "CountrySubdivision")]
        pub country_subdivision_code: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct AttendeeType {
        #[serde(rename = "ID")]
        pub id: String,
        #[serde(default)]
        pub code: Option<String>,
        #[serde(default)]
        pub name: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct AttendeeCreate {
        #[serde(rename = "AttendeeTypeID")]
        pub attendee_type_id: String,
        pub first_name: String,
        pub last_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub company: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(rename = "ExternalID", skip_serializing_if = "Option::is_none")]
        pub external_id: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct AttendeeAssociation {
        #[serde(rename = "EntryID")]
        pub entry_id: String,
        #[serde(rename = "AttendeeID")]
        pub attendee_id: String,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct ItemizationCreate {
        #[serde(rename = "ReportID")]
        pub report_id: String,
        #[serde(rename = "EntryID")]
        pub entry_id: String,
        pub expense_type_code: String,
        pub transaction_date: String,
        pub transaction_amount: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub comment: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ReceiptImage {
        #[serde(rename = "ID")]
        pub id: String,
        #[serde(rename = "URI", default)]
        pub uri: Option<String>,
    }
}

/* -------------------------------------------------------------------------- */
/* v4 (JSON, camelCase) */
/* -------------------------------------------------------------------------- */

pub mod v4 {
    use super::Deserialize;

    /// Identity profile of the token's user.
    #[derive(Debug, Clone, Deserialize)]
    pub struct Identity {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Expense {
        pub expense_id: String,
        #[serde(default)]
        pub expense_type: Option<ExpenseTypeRef>,
        #[serde(default)]
        pub transaction_date: Option<String>,
        #[serde(default)]
        pub transaction_amount: Option<Amount>,
        #[serde(default)]
        pub business_purpose: Option<String>,
        #[serde(default)]
        pub vendor: Option<Vendor>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ExpenseTypeRef {
        #[serde(default)]
        pub id: Option<String>,
        #[serde(default)]
        pub name: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Amount {
        #[serde(default)]
        pub value: Option<f64>,
        #[serde(default)]
        pub currency_code: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Vendor {
        #[serde(default)]
        pub name: Option<String>,
    }
}

/* -------------------------------------------------------------------------- */
/* Conversions into domain types */
/* -------------------------------------------------------------------------- */

impl From<v3::Report> for ExpenseReport {
    fn from(report: v3::Report) -> Self {
        Self {
            status: report
                .approval_status_code
                .as_deref()
                .map_or(ReportStatus::Unknown, ReportStatus::from_approval_code),
            name: report.name.unwrap_or_default(),
            id: report.id,
            purpose: report.purpose,
            total: report.total,
            currency: report.currency_code,
            payment_status: report.payment_status_name,
            created: report.create_date,
            submitted: report.submit_date,
        }
    }
}

impl From<v3::ExpenseType> for ExpenseType {
    fn from(value: v3::ExpenseType) -> Self {
        Self { name: value.name.unwrap_or_else(|| value.code.clone()), code: value.code }
    }
}

impl From<v3::PaymentType> for PaymentType {
    fn from(value: v3::PaymentType) -> Self {
        Self { name: value.name.unwrap_or_default(), id: value.id, is_default: value.is_default }
    }
}

impl From<v3::Location> for Location {
    fn from(value: v3::Location) -> Self {
        Self {
            id: value.id,
            name: value.name.unwrap_or_default(),
            country_code: value.country_code,
            subdivision: value.country_subdivision_code,
        }
    }
}

impl From<v3::AttendeeType> for AttendeeType {
    fn from(value: v3::AttendeeType) -> Self {
        Self {
            code: value.code.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            id: value.id,
        }
    }
}

impl From<v3::ReceiptImage> for ReceiptImage {
    fn from(value: v3::ReceiptImage) -> Self {
        Self { id: value.id, url: value.uri }
    }
}

impl v4::Expense {
    /// Convert with the report id the list was fetched for.
    #[must_use]
    pub fn into_entry(self, report_id: &str) -> ExpenseEntry {
        let (expense_type_code, expense_type_name) =
            self.expense_type.map_or((None, None), |t| (t.id, t.name));
        let (amount, currency) =
            self.transaction_amount.map_or((None, None), |a| (a.value, a.currency_code));

        ExpenseEntry {
            id: self.expense_id,
            report_id: Some(report_id.to_string()),
            expense_type_code,
            expense_type_name,
            transaction_date: self.transaction_date,
            amount,
            currency,
            business_purpose: self.business_purpose,
            vendor: self.vendor.and_then(|v| v.name),
        }
    }
}
