//! Expense creation workflows on top of an [`ExpenseProvider`]
//!
//! Resolution lookups are best effort: when a lookup endpoint fails the
//! caller's text is used as-is and the provider gets the final say.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use travex_domain::constants::{
    DEFAULT_CURRENCY, DEFAULT_PAYMENT_TYPE, DEFAULT_PER_DIEM_EXPENSE_TYPE,
};
use travex_domain::{NewExpense, PerDiemCalculation, Result, TravexError};

use super::ports::ExpenseProvider;
use super::resolution::{resolve_expense_type, resolve_payment_type};
use crate::per_diem::{build_per_diem_expenses, PerDiemCalculator, PerDiemExpenseTemplate};

/// Defaults applied when a request leaves a field out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDefaults {
    pub per_diem_expense_type: String,
    pub currency: String,
}

impl Default for ExpenseDefaults {
    fn default() -> Self {
        Self {
            per_diem_expense_type: DEFAULT_PER_DIEM_EXPENSE_TYPE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Loosely specified expense, as supplied by a tool caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub report_id: String,
    /// Expense type code or display name
    pub expense_type: String,
    pub transaction_date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    /// Payment type id or name
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub business_purpose: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Identifiers of a created expense after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedExpense {
    pub entry_id: String,
    pub expense_type_code: String,
    pub payment_type_id: String,
    pub location_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDiemBatchRequest {
    pub report_id: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    #[serde(default)]
    pub business_purpose: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
}

/// Where a per-diem batch stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDiemBatchFailure {
    pub date: NaiveDate,
    pub error: TravexError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDiemBatchResult {
    pub calculation: PerDiemCalculation,
    pub created_entry_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<PerDiemBatchFailure>,
}

impl PerDiemBatchResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Expense workflows shared by every tool surface
pub struct ExpenseService {
    provider: Arc<dyn ExpenseProvider>,
    calculator: PerDiemCalculator,
    defaults: ExpenseDefaults,
}

impl ExpenseService {
    #[must_use]
    pub fn new(
        provider: Arc<dyn ExpenseProvider>,
        calculator: PerDiemCalculator,
        defaults: ExpenseDefaults,
    ) -> Self {
        Self { provider, calculator, defaults }
    }

    #[must_use]
    pub fn calculator(&self) -> &PerDiemCalculator {
        &self.calculator
    }

    #[must_use]
    pub fn provider(&self) -> &Arc<dyn ExpenseProvider> {
        &self.provider
    }

    /// Resolve identifiers and create one expense entry.
    ///
    /// # Errors
    /// Returns [`TravexError::InvalidInput`] for a blank report id, a
    /// non-finite amount or an expense type the provider does not offer, and
    /// any provider error from the create call.
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> Result<CreatedExpense> {
        if draft.report_id.trim().is_empty() {
            return Err(TravexError::InvalidInput("reportId is required".into()));
        }
        if !draft.amount.is_finite() {
            return Err(TravexError::InvalidInput(format!("invalid amount: {}", draft.amount)));
        }

        let expense_type_code = self.expense_type_code(&draft.expense_type).await?;
        let payment_type_id = self.payment_type_id(draft.payment_type.as_deref()).await;
        let location_id = match &draft.city {
            Some(city) => self.location_id(city).await,
            None => None,
        };

        let expense = NewExpense {
            report_id: draft.report_id.clone(),
            expense_type_code: expense_type_code.clone(),
            transaction_date: draft.transaction_date,
            amount: draft.amount,
            currency: self.currency(draft.currency.as_deref()),
            payment_type_id: Some(payment_type_id.clone()),
            location_id: location_id.clone(),
            business_purpose: draft.business_purpose.clone(),
            vendor: draft.vendor.clone(),
            comment: draft.comment.clone(),
        };

        let entry_id = self.provider.create_expense(&expense).await?;
        info!(entry_id = %entry_id, expense_type = %expense_type_code, "expense created");

        Ok(CreatedExpense { entry_id, expense_type_code, payment_type_id, location_id })
    }

    /// Calculate per diem and create one expense per day.
    ///
    /// Stops at the first failed create; the result then lists the entries
    /// created so far and the failing day.
    ///
    /// # Errors
    /// Returns [`TravexError::InvalidDateRange`] before any provider call when
    /// the dates are invalid.
    pub async fn create_per_diem_expenses(
        &self,
        request: &PerDiemBatchRequest,
    ) -> Result<PerDiemBatchResult> {
        if request.report_id.trim().is_empty() {
            return Err(TravexError::InvalidInput("reportId is required".into()));
        }

        let calculation =
            self.calculator.calculate(&request.start_date, &request.end_date, &request.location)?;

        let template = PerDiemExpenseTemplate {
            report_id: request.report_id.clone(),
            expense_type_code: self.defaults.per_diem_expense_type.clone(),
            currency: self.currency(request.currency.as_deref()),
            payment_type_id: Some(self.payment_type_id(request.payment_type.as_deref()).await),
            location_id: self.location_id(&request.location).await,
            business_purpose: request.business_purpose.clone(),
        };

        let drafts = build_per_diem_expenses(&calculation, &template);
        let mut created_entry_ids = Vec::with_capacity(drafts.len());
        let mut failure = None;

        for draft in &drafts {
            match self.provider.create_expense(draft).await {
                Ok(entry_id) => created_entry_ids.push(entry_id),
                Err(error) => {
                    warn!(
                        date = %draft.transaction_date,
                        created = created_entry_ids.len(),
                        error = %error,
                        "per-diem batch stopped"
                    );
                    failure = Some(PerDiemBatchFailure { date: draft.transaction_date, error });
                    break;
                }
            }
        }

        info!(
            report_id = %request.report_id,
            created = created_entry_ids.len(),
            total_days = calculation.total_days,
            "per-diem batch finished"
        );

        Ok(PerDiemBatchResult { calculation, created_entry_ids, failure })
    }

    fn currency(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map_or_else(|| self.defaults.currency.clone(), str::to_uppercase)
    }

    async fn expense_type_code(&self, requested: &str) -> Result<String> {
        let requested = requested.trim();
        if requested.is_empty() {
            return Err(TravexError::InvalidInput("expenseType is required".into()));
        }

        match self.provider.list_expense_types().await {
            Ok(types) => resolve_expense_type(&types, requested)
                .map(|t| t.code.clone())
                .ok_or_else(|| {
                    TravexError::InvalidInput(format!("unknown expense type: {requested}"))
                }),
            Err(error) => {
                warn!(error = %error, "expense type lookup failed, using requested code");
                Ok(requested.to_string())
            }
        }
    }

    async fn payment_type_id(&self, requested: Option<&str>) -> String {
        match self.provider.list_payment_types().await {
            Ok(types) => resolve_payment_type(&types, requested),
            Err(error) => {
                warn!(error = %error, "payment type lookup failed");
                requested
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map_or_else(|| DEFAULT_PAYMENT_TYPE.to_string(), str::to_string)
            }
        }
    }

    async fn location_id(&self, city: &str) -> Option<String> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        match self.provider.find_location(city).await {
            Ok(location) => location.map(|l| l.id),
            Err(error) => {
                warn!(city, error = %error, "location lookup failed");
                None
            }
        }
    }
}
