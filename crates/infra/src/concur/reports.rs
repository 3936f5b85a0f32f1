//! Expense report operations

use reqwest::Method;
use tracing::info;
use travex_common::auth::OAuthClientTrait;
use travex_domain::{
    ExpenseReport, NewReport, ReportStatus, Result, SubmitReportResult, TravexError,
};

use super::client::{segment, RequestOptions};
use super::service::ConcurClient;
use super::shapes::v3;
use super::xml::XmlFields;

const REPORTS_PATH: &str = "/api/v3.0/expense/reports";
const LEGACY_REPORT_PATH: &str = "/api/expense/expensereport/v1.1/report";

impl<C: OAuthClientTrait + 'static> ConcurClient<C> {
    /// Reports owned by the current user, in provider order.
    ///
    /// # Errors
    /// Request errors from the resilient client.
    pub async fn list_reports(&self, limit: Option<u32>) -> Result<Vec<ExpenseReport>> {
        let mut url = self.api.url(REPORTS_PATH);
        if let Some(limit) = limit {
            url.push_str(&format!("?limit={limit}"));
        }

        let page: v3::Page<v3::Report> = self
            .api
            .request_json(Method::GET, &url, &RequestOptions::default(), "list reports")
            .await?;
        Ok(page.items.into_iter().map(ExpenseReport::from).collect())
    }

    /// # Errors
    /// Request errors; a 404 surfaces as [`TravexError::Api`].
    pub async fn get_report(&self, report_id: &str) -> Result<ExpenseReport> {
        let url = self.api.url(&format!("{REPORTS_PATH}/{}", segment(report_id)));
        let report: v3::Report = self
            .api
            .request_json(Method::GET, &url, &RequestOptions::default(), "get report")
            .await?;
        Ok(report.into())
    }

    /// Create an empty report owned by the current user.
    ///
    /// # Errors
    /// [`TravexError::InvalidInput`] for a blank name, otherwise request errors.
    pub async fn create_report(&self, report: &NewReport) -> Result<ExpenseReport> {
        let name = report.name.trim();
        if name.is_empty() {
            return Err(TravexError::InvalidInput("report name must not be empty".into()));
        }

        let body = v3::ReportCreate {
            name: name.to_string(),
            purpose: report.purpose.clone(),
            comment: report.comment.clone(),
            currency_code: report.currency.as_ref().map(|c| c.trim().to_ascii_uppercase()),
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| TravexError::Internal(format!("report body: {e}")))?;

        let created: v3::Created = self
            .api
            .request_json(
                Method::POST,
                &self.api.url(REPORTS_PATH),
                &RequestOptions::json(body),
                "create report",
            )
            .await?;
        info!(report_id = %created.id, "expense report created");

        Ok(ExpenseReport {
            id: created.id,
            name: name.to_string(),
            purpose: report.purpose.clone(),
            total: Some(0.0),
            currency: report.currency.clone(),
            status: ReportStatus::NotSubmitted,
            payment_status: None,
            created: None,
            submitted: None,
        })
    }

    /// Submit a report for approval through the legacy XML endpoint.
    ///
    /// The response fields are extracted best effort: a field the provider
    /// leaves out reads as `None`.
    ///
    /// # Errors
    /// Request errors from the resilient client.
    pub async fn submit_report(&self, report_id: &str) -> Result<SubmitReportResult> {
        let url = self.api.url(&format!("{LEGACY_REPORT_PATH}/{}/submit", segment(report_id)));
        let options = RequestOptions::xml(String::new()).header("Accept", "application/xml");

        let xml = self.api.request_text(Method::POST, &url, &options, "submit report").await?;
        let fields = XmlFields::new(&xml);
        let result = SubmitReportResult {
            report_id: report_id.to_string(),
            status: fields.field("Status"),
            report_status: fields.field("Report-Status"),
            message: fields.field("Message"),
        };
        info!(report_id, status = ?result.status, "expense report submitted");
        Ok(result)
    }
}
