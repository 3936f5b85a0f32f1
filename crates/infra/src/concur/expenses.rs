//! Expense entry operations
//!
//! Listing and deleting go through the v4 user-scoped API, creation through
//! v3 entries.

use reqwest::Method;
use serde::Deserialize;
use tracing::info;
use travex_common::auth::OAuthClientTrait;
use travex_domain::{ExpenseEntry, NewExpense, Result, TravexError};

use super::client::{segment, RequestOptions};
use super::service::ConcurClient;
use super::shapes::{v3, v4};

const ENTRIES_PATH: &str = "/api/v3.0/expense/entries";

/// The v4 list answers with either a bare array or an `expenses` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExpenseList {
    Bare(Vec<v4::Expense>),
    Wrapped { expenses: Vec<v4::Expense> },
}

impl<C: OAuthClientTrait + 'static> ConcurClient<C> {
    async fn report_expenses_url(&self, report_id: &str) -> Result<String> {
        let user = self.user_id().await?;
        Ok(self.api.url(&format!(
            "/expensereports/v4/users/{}/context/TRAVELER/reports/{}/expenses",
            segment(&user),
            segment(report_id)
        )))
    }

    /// # Errors
    /// Identity resolution or request errors.
    pub async fn list_report_expenses(&self, report_id: &str) -> Result<Vec<ExpenseEntry>> {
        let url = self.report_expenses_url(report_id).await?;
        let list: Option<ExpenseList> = self
            .api
            .request_json(Method::GET, &url, &RequestOptions::default(), "list report expenses")
            .await?;

        let expenses = match list {
            Some(ExpenseList::Bare(expenses) | ExpenseList::Wrapped { expenses }) => expenses,
            None => Vec::new(),
        };
        Ok(expenses.into_iter().map(|e| e.into_entry(report_id)).collect())
    }

    /// Create one entry and return the provider-issued id.
    ///
    /// # Errors
    /// [`TravexError::InvalidInput`] for a non-finite amount, otherwise
    /// request errors.
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<String> {
        if !expense.amount.is_finite() {
            return Err(TravexError::InvalidInput("amount must be a finite number".into()));
        }

        let body = v3::EntryCreate {
            report_id: expense.report_id.clone(),
            expense_type_code: expense.expense_type_code.clone(),
            transaction_date: expense.transaction_date.format("%Y-%m-%d").to_string(),
            transaction_amount: expense.amount,
            transaction_currency_code: expense.currency.clone(),
            payment_type_id: expense.payment_type_id.clone(),
            location_id: expense.location_id.clone(),
            business_purpose: expense.business_purpose.clone(),
            vendor_description: expense.vendor.clone(),
            comment: expense.comment.clone(),
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| TravexError::Internal(format!("expense body: {e}")))?;

        let created: v3::Created = self
            .api
            .request_json(
                Method::POST,
                &self.api.url(ENTRIES_PATH),
                &RequestOptions::json(body),
                "create expense",
            )
            .await?;
        info!(
            entry_id = %created.id,
            report_id = %expense.report_id,
            expense_type = %expense.expense_type_code,
            "expense entry created"
        );
        Ok(created.id)
    }

    /// # Errors
    /// Identity resolution or request errors.
    pub async fn delete_expense(&self, report_id: &str, expense_id: &str) -> Result<()> {
        let url = format!("{}/{}", self.report_expenses_url(report_id).await?, segment(expense_id));
        self.api.request(Method::DELETE, &url, &RequestOptions::default(), "delete expense").await?;
        info!(report_id, expense_id, "expense entry deleted");
        Ok(())
    }
}
