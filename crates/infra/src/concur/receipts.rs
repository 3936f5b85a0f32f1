//! Receipt image operations
//!
//! Listing uses v3; the report image and entry upload only exist on the
//! legacy v1.0 image API, which answers in XML.

use reqwest::Method;
use tracing::info;
use travex_common::auth::OAuthClientTrait;
use travex_domain::{ReceiptImage, ReportImage, Result, TravexError};

use super::client::{segment, RequestOptions};
use super::service::ConcurClient;
use super::shapes::v3;
use super::xml::XmlFields;

const RECEIPT_IMAGES_PATH: &str = "/api/v3.0/expense/receiptimages";
const LEGACY_IMAGE_PATH: &str = "/api/image/v1.0";

/// Content types the image API accepts.
const ACCEPTED_CONTENT_TYPES: [&str; 4] =
    ["image/png", "image/jpeg", "image/jpg", "application/pdf"];

impl<C: OAuthClientTrait + 'static> ConcurClient<C> {
    /// # Errors
    /// Request errors from the resilient client.
    pub async fn list_receipts(&self) -> Result<Vec<ReceiptImage>> {
        let page: v3::Page<v3::ReceiptImage> = self
            .api
            .request_json(
                Method::GET,
                &self.api.url(RECEIPT_IMAGES_PATH),
                &RequestOptions::default(),
                "list receipts",
            )
            .await?;
        Ok(page.items.into_iter().map(ReceiptImage::from).collect())
    }

    /// # Errors
    /// Request errors from the resilient client.
    pub async fn get_report_image(&self, report_id: &str) -> Result<ReportImage> {
        let url = self.api.url(&format!("{LEGACY_IMAGE_PATH}/report/{}", segment(report_id)));
        let options = RequestOptions::default().header("Accept", "application/xml");
        let xml = self.api.request_text(Method::GET, &url, &options, "get report image").await?;

        let fields = XmlFields::new(&xml);
        Ok(ReportImage {
            report_id: report_id.to_string(),
            image_id: fields.first_of(&["Id", "ID"]),
            url: fields.first_of(&["Url", "URL"]),
        })
    }

    /// Upload raw receipt bytes and attach them to an entry.
    ///
    /// # Errors
    /// [`TravexError::InvalidInput`] for an empty payload or unsupported
    /// content type, otherwise request errors. A response without an image
    /// id is a [`TravexError::Decode`].
    pub async fn upload_receipt(
        &self,
        entry_id: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<ReceiptImage> {
        let content_type = content_type.trim().to_ascii_lowercase();
        if !ACCEPTED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(TravexError::InvalidInput(format!(
                "unsupported receipt content type '{content_type}'"
            )));
        }
        if data.is_empty() {
            return Err(TravexError::InvalidInput("receipt image is empty".into()));
        }

        let size = data.len();
        let url = self.api.url(&format!("{LEGACY_IMAGE_PATH}/expenseentry/{}", segment(entry_id)));
        let options = RequestOptions::bytes(content_type, data).header("Accept", "application/xml");
        let xml = self.api.request_text(Method::POST, &url, &options, "upload receipt").await?;

        let fields = XmlFields::new(&xml);
        let id = fields
            .first_of(&["Id", "ID"])
            .ok_or_else(|| TravexError::Decode("upload receipt: response has no image id".into()))?;
        info!(entry_id, image_id = %id, size, "receipt uploaded");

        Ok(ReceiptImage { id, url: fields.first_of(&["Url", "URL"]) })
    }
}
