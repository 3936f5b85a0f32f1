//! Expense type, payment type and location lookups

use reqwest::Method;
use tracing::debug;
use travex_common::auth::OAuthClientTrait;
use travex_domain::{ExpenseType, Location, PaymentType, Result};

use super::client::RequestOptions;
use super::service::ConcurClient;
use super::shapes::v3;

const GROUP_CONFIGURATIONS_PATH: &str = "/api/v3.0/expense/expensegroupconfigurations";
const LOCATIONS_PATH: &str = "/api/v3.0/common/locations";

impl<C: OAuthClientTrait + 'static> ConcurClient<C> {
    async fn group_configurations(&self, context: &str) -> Result<Vec<v3::GroupConfiguration>> {
        let page: v3::Page<v3::GroupConfiguration> = self
            .api
            .request_json(
                Method::GET,
                &self.api.url(GROUP_CONFIGURATIONS_PATH),
                &RequestOptions::default(),
                context,
            )
            .await?;
        Ok(page.items)
    }

    /// Expense types across all policies of the user's groups, first
    /// occurrence of each code wins.
    ///
    /// # Errors
    /// Request errors from the resilient client.
    pub async fn list_expense_types(&self) -> Result<Vec<ExpenseType>> {
        let mut types: Vec<ExpenseType> = Vec::new();
        for group in self.group_configurations("list expense types").await? {
            let policy_types = group.policies.into_iter().flat_map(|p| p.expense_types);
            for candidate in group.expense_types.into_iter().chain(policy_types) {
                if !types.iter().any(|t| t.code.eq_ignore_ascii_case(&candidate.code)) {
                    types.push(candidate.into());
                }
            }
        }
        debug!(count = types.len(), "expense types loaded");
        Ok(types)
    }

    /// # Errors
    /// Request errors from the resilient client.
    pub async fn list_payment_types(&self) -> Result<Vec<PaymentType>> {
        let mut types: Vec<PaymentType> = Vec::new();
        for group in self.group_configurations("list payment types").await? {
            for candidate in group.payment_types {
                if !types.iter().any(|t| t.id == candidate.id) {
                    types.push(candidate.into());
                }
            }
        }
        debug!(count = types.len(), "payment types loaded");
        Ok(types)
    }

    /// First location matching `city`, if any.
    ///
    /// # Errors
    /// Request errors from the resilient client.
    pub async fn find_location(&self, city: &str) -> Result<Option<Location>> {
        let city = city.trim();
        if city.is_empty() {
            return Ok(None);
        }

        let url = format!("{}?city={}", self.api.url(LOCATIONS_PATH), urlencoding::encode(city));
        let page: v3::Page<v3::Location> = self
            .api
            .request_json(Method::GET, &url, &RequestOptions::default(), "find location")
            .await?;
        Ok(page.items.into_iter().next().map(Location::from))
    }
}
