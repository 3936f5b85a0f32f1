//! Receipt image tools

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{json, Value};
use travex_domain::{Result as DomainResult, TravexError};

use super::{object_schema, ToolDefinition};
use crate::context::AppContext;
use crate::utils::command_helpers::{parse_args, to_payload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportArgs {
    report_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadArgs {
    entry_id: String,
    content_type: String,
    /// Base64-encoded image bytes
    data: String,
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "list_receipts",
            "List receipt images uploaded by the current user.",
            object_schema(json!({}), &[]),
        ),
        ToolDefinition::new(
            "get_report_image",
            "Get the combined receipt image URL of a report.",
            object_schema(json!({"reportId": {"type": "string"}}), &["reportId"]),
        ),
        ToolDefinition::new(
            "upload_receipt",
            "Upload a receipt image (PNG, JPEG or PDF) and attach it to an expense entry.",
            object_schema(
                json!({
                    "entryId": {"type": "string"},
                    "contentType": {
                        "type": "string",
                        "enum": ["image/png", "image/jpeg", "application/pdf"]
                    },
                    "data": {"type": "string", "description": "Base64-encoded file content"}
                }),
                &["entryId", "contentType", "data"],
            ),
        ),
    ]
}

pub(super) async fn list_receipts(ctx: &AppContext) -> DomainResult<Value> {
    to_payload(&ctx.provider().list_receipts().await?)
}

pub(super) async fn get_report_image(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: ReportArgs = parse_args("get_report_image", arguments)?;
    to_payload(&ctx.provider().get_report_image(&args.report_id).await?)
}

pub(super) async fn upload_receipt(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: UploadArgs = parse_args("upload_receipt", arguments)?;
    let data = STANDARD
        .decode(args.data.trim())
        .map_err(|e| TravexError::InvalidInput(format!("receipt data is not valid base64: {e}")))?;

    to_payload(&ctx.provider().upload_receipt(&args.entry_id, &args.content_type, data).await?)
}
