//! Attendee and itemization operations (v3)

use reqwest::Method;
use tracing::info;
use travex_common::auth::OAuthClientTrait;
use travex_domain::{
    Attendee, AttendeeType, Itemization, NewAttendee, NewItemization, Result, TravexError,
};

use super::client::RequestOptions;
use super::service::ConcurClient;
use super::shapes::v3;

const ATTENDEE_TYPES_PATH: &str = "/api/v3.0/expense/attendeetypes";
const ATTENDEES_PATH: &str = "/api/v3.0/expense/attendees";
const ASSOCIATIONS_PATH: &str = "/api/v3.0/expense/entryattendeeassociations";
const ITEMIZATIONS_PATH: &str = "/api/v3.0/expense/itemizations";

fn to_body<T: serde::Serialize>(value: &T, what: &str) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| TravexError::Internal(format!("{what} body: {e}")))
}

impl<C: OAuthClientTrait + 'static> ConcurClient<C> {
    /// # Errors
    /// Request errors from the resilient client.
    pub async fn list_attendee_types(&self) -> Result<Vec<AttendeeType>> {
        let page: v3::Page<v3::AttendeeType> = self
            .api
            .request_json(
                Method::GET,
                &self.api.url(ATTENDEE_TYPES_PATH),
                &RequestOptions::default(),
                "list attendee types",
            )
            .await?;
        Ok(page.items.into_iter().map(AttendeeType::from).collect())
    }

    /// # Errors
    /// [`TravexError::InvalidInput`] without a last name, otherwise request
    /// errors.
    pub async fn create_attendee(&self, attendee: &NewAttendee) -> Result<Attendee> {
        if attendee.last_name.trim().is_empty() {
            return Err(TravexError::InvalidInput("attendee last name must not be empty".into()));
        }

        let body = v3::AttendeeCreate {
            attendee_type_id: attendee.attendee_type_id.clone(),
            first_name: attendee.first_name.clone(),
            last_name: attendee.last_name.clone(),
            company: attendee.company.clone(),
            title: attendee.title.clone(),
            external_id: attendee.external_id.clone(),
        };
        let created: v3::Created = self
            .api
            .request_json(
                Method::POST,
                &self.api.url(ATTENDEES_PATH),
                &RequestOptions::json(to_body(&body, "attendee")?),
                "create attendee",
            )
            .await?;
        info!(attendee_id = %created.id, "attendee created");

        Ok(Attendee {
            id: created.id,
            first_name: Some(attendee.first_name.clone()).filter(|n| !n.is_empty()),
            last_name: Some(attendee.last_name.clone()),
            company: attendee.company.clone(),
            attendee_type_code: None,
        })
    }

    /// Associate each attendee with an entry, one call per attendee.
    ///
    /// # Errors
    /// The first failing association; earlier ones stay in place.
    pub async fn associate_attendees(&self, entry_id: &str, attendee_ids: &[String]) -> Result<()> {
        let url = self.api.url(ASSOCIATIONS_PATH);
        for attendee_id in attendee_ids {
            let body = v3::AttendeeAssociation {
                entry_id: entry_id.to_string(),
                attendee_id: attendee_id.clone(),
            };
            self.api
                .request(
                    Method::POST,
                    &url,
                    &RequestOptions::json(to_body(&body, "association")?),
                    "associate attendee",
                )
                .await?;
        }
        info!(entry_id, count = attendee_ids.len(), "attendees associated");
        Ok(())
    }

    /// # Errors
    /// Request errors from the resilient client.
    pub async fn create_itemization(&self, itemization: &NewItemization) -> Result<Itemization> {
        let body = v3::ItemizationCreate {
            report_id: itemization.report_id.clone(),
            entry_id: itemization.entry_id.clone(),
            expense_type_code: itemization.expense_type_code.clone(),
            transaction_date: itemization.transaction_date.format("%Y-%m-%d").to_string(),
            transaction_amount: itemization.amount,
            comment: itemization.comment.clone(),
        };
        let created: v3::Created = self
            .api
            .request_json(
                Method::POST,
                &self.api.url(ITEMIZATIONS_PATH),
                &RequestOptions::json(to_body(&body, "itemization")?),
                "create itemization",
            )
            .await?;
        info!(
            itemization_id = %created.id,
            entry_id = %itemization.entry_id,
            "itemization created"
        );

        Ok(Itemization {
            id: created.id,
            entry_id: itemization.entry_id.clone(),
            expense_type_code: Some(itemization.expense_type_code.clone()),
            amount: Some(itemization.amount),
            transaction_date: Some(body.transaction_date),
        })
    }
}
