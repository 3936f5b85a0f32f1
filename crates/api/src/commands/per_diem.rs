//! Per-diem tools

use serde::Deserialize;
use serde_json::{json, Value};
use travex_core::PerDiemBatchRequest;
use travex_domain::Result as DomainResult;

use super::{object_schema, ToolDefinition};
use crate::context::AppContext;
use crate::utils::command_helpers::{parse_args, to_payload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateArgs {
    start_date: String,
    end_date: String,
    location: String,
}

#[derive(Debug, Deserialize)]
struct RateArgs {
    location: String,
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    let dates = json!({
        "startDate": {"type": "string", "description": "First travel day (YYYY-MM-DD)"},
        "endDate": {"type": "string", "description": "Last travel day (YYYY-MM-DD)"},
        "location": {"type": "string", "description": "City or region, e.g. \"New York\""}
    });

    let mut batch = dates.clone();
    if let Value::Object(props) = &mut batch {
        props.insert("reportId".into(), json!({"type": "string"}));
        props.insert("businessPurpose".into(), json!({"type": "string"}));
        props.insert(
            "currency".into(),
            json!({"type": "string", "description": "ISO currency code"}),
        );
        props.insert(
            "paymentType".into(),
            json!({"type": "string", "description": "Payment type id or name"}),
        );
    }

    vec![
        ToolDefinition::new(
            "calculate_per_diem",
            "Calculate per-diem allowance for a trip. \
             First and last days are paid at the partial rate.",
            object_schema(dates, &["startDate", "endDate", "location"]),
        ),
        ToolDefinition::new(
            "find_per_diem_rate",
            "Look up the daily per-diem rate that applies to a location.",
            object_schema(
                json!({"location": {"type": "string"}}),
                &["location"],
            ),
        ),
        ToolDefinition::new(
            "create_per_diem_expenses",
            "Calculate per diem for a trip and create one expense entry per day on a report.",
            object_schema(batch, &["reportId", "startDate", "endDate", "location"]),
        ),
    ]
}

pub(super) fn calculate_per_diem(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: CalculateArgs = parse_args("calculate_per_diem", arguments)?;
    let calculation = ctx.calculator().calculate(&args.start_date, &args.end_date, &args.location)?;
    to_payload(&calculation)
}

pub(super) fn find_per_diem_rate(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: RateArgs = parse_args("find_per_diem_rate", arguments)?;
    to_payload(ctx.calculator().find_rate(&args.location)?)
}

pub(super) async fn create_per_diem_expenses(
    ctx: &AppContext,
    arguments: Value,
) -> DomainResult<Value> {
    let request: PerDiemBatchRequest = parse_args("create_per_diem_expenses", arguments)?;
    let result = ctx.expenses.create_per_diem_expenses(&request).await?;

    let mut payload = to_payload(&result)?;
    if let Value::Object(fields) = &mut payload {
        fields.insert("createdCount".into(), json!(result.created_entry_ids.len()));
        fields.insert("complete".into(), json!(result.is_complete()));
    }
    Ok(payload)
}
