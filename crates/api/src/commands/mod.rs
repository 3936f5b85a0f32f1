//! Tool handlers - protocol to service bridge
//!
//! Each tool takes named JSON arguments and returns a JSON payload. Tools
//! are grouped by resource; this module only owns the registry and the
//! dispatch table.

mod expenses;
mod per_diem;
mod receipts;
mod reconciliation;
mod reports;

use serde::Serialize;
use serde_json::{json, Value};
use travex_domain::{Result as DomainResult, TravexError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_tool;

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

impl ToolDefinition {
    pub(crate) fn new(name: &'static str, description: &'static str, input_schema: Value) -> Self {
        Self { name, description, input_schema }
    }
}

/// JSON Schema for an object with the given properties.
pub(crate) fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// All tools, in the order they are listed to clients.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let mut tools = per_diem::definitions();
    tools.extend(reports::definitions());
    tools.extend(expenses::definitions());
    tools.extend(receipts::definitions());
    tools.extend(reconciliation::definitions());
    tools
}

/// Run one tool by name.
///
/// # Errors
/// [`TravexError::NotFound`] for an unknown tool; otherwise whatever the tool
/// returns.
pub async fn call_tool(ctx: &AppContext, name: &str, arguments: Value) -> DomainResult<Value> {
    execute_tool(name, || async move {
        match name {
            "calculate_per_diem" => per_diem::calculate_per_diem(ctx, arguments),
            "find_per_diem_rate" => per_diem::find_per_diem_rate(ctx, arguments),
            "create_per_diem_expenses" => per_diem::create_per_diem_expenses(ctx, arguments).await,
            "list_reports" => reports::list_reports(ctx, arguments).await,
            "get_report" => reports::get_report(ctx, arguments).await,
            "create_report" => reports::create_report(ctx, arguments).await,
            "submit_report" => reports::submit_report(ctx, arguments).await,
            "list_report_expenses" => expenses::list_report_expenses(ctx, arguments).await,
            "create_expense" => expenses::create_expense(ctx, arguments).await,
            "delete_expense" => expenses::delete_expense(ctx, arguments).await,
            "add_attendee" => expenses::add_attendee(ctx, arguments).await,
            "create_itemization" => expenses::create_itemization(ctx, arguments).await,
            "list_receipts" => receipts::list_receipts(ctx).await,
            "get_report_image" => receipts::get_report_image(ctx, arguments).await,
            "upload_receipt" => receipts::upload_receipt(ctx, arguments).await,
            "reconcile_charges" => reconciliation::reconcile_charges(arguments),
            other => Err(TravexError::NotFound(format!("unknown tool: {other}"))),
        }
    })
    .await
}
