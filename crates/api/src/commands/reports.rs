//! Expense report tools

use serde::Deserialize;
use serde_json::{json, Value};
use travex_domain::{NewReport, Result as DomainResult};

use super::{object_schema, ToolDefinition};
use crate::context::AppContext;
use crate::utils::command_helpers::{parse_args, to_payload};

#[derive(Debug, Deserialize)]
struct ListArgs {
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportArgs {
    report_id: String,
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    let report_id = json!({"reportId": {"type": "string"}});

    vec![
        ToolDefinition::new(
            "list_reports",
            "List the current user's expense reports.",
            object_schema(
                json!({
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Maximum reports to return"
                    }
                }),
                &[],
            ),
        ),
        ToolDefinition::new(
            "get_report",
            "Get one expense report with its status and totals.",
            object_schema(report_id.clone(), &["reportId"]),
        ),
        ToolDefinition::new(
            "create_report",
            "Create a new, empty expense report.",
            object_schema(
                json!({
                    "name": {"type": "string"},
                    "purpose": {"type": "string"},
                    "comment": {"type": "string"},
                    "currency": {"type": "string", "description": "ISO currency code"}
                }),
                &["name"],
            ),
        ),
        ToolDefinition::new(
            "submit_report",
            "Submit an expense report for approval.",
            object_schema(report_id, &["reportId"]),
        ),
    ]
}

pub(super) async fn list_reports(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: ListArgs = parse_args("list_reports", arguments)?;
    let reports = ctx.provider().list_reports(args.limit).await?;
    to_payload(&reports)
}

pub(super) async fn get_report(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: ReportArgs = parse_args("get_report", arguments)?;
    to_payload(&ctx.provider().get_report(&args.report_id).await?)
}

pub(super) async fn create_report(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let report: NewReport = parse_args("create_report", arguments)?;
    to_payload(&ctx.provider().create_report(&report).await?)
}

pub(super) async fn submit_report(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: ReportArgs = parse_args("submit_report", arguments)?;
    to_payload(&ctx.provider().submit_report(&args.report_id).await?)
}
