//! Expense entry, attendee and itemization tools

use serde::Deserialize;
use serde_json::{json, Value};
use travex_core::ExpenseDraft;
use travex_domain::{NewAttendee, NewItemization, Result as DomainResult, TravexError};

use super::{object_schema, ToolDefinition};
use crate::context::AppContext;
use crate::utils::command_helpers::{parse_args, to_payload};

/// Attendee type used when the caller names none.
const DEFAULT_ATTENDEE_TYPE: &str = "BUSGUEST";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportArgs {
    report_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteArgs {
    report_id: String,
    expense_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttendeeArgs {
    entry_id: String,
    #[serde(default)]
    first_name: String,
    last_name: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    attendee_type_id: Option<String>,
    /// Attendee type code or name
    #[serde(default)]
    attendee_type: Option<String>,
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "list_report_expenses",
            "List the expense entries on a report.",
            object_schema(json!({"reportId": {"type": "string"}}), &["reportId"]),
        ),
        ToolDefinition::new(
            "create_expense",
            "Create an expense entry. Expense type and payment type may be given by code or name; \
             the city is resolved to a provider location when possible.",
            object_schema(
                json!({
                    "reportId": {"type": "string"},
                    "expenseType": {"type": "string", "description": "Expense type code or name"},
                    "transactionDate": {"type": "string", "description": "YYYY-MM-DD"},
                    "amount": {"type": "number"},
                    "currency": {"type": "string"},
                    "paymentType": {"type": "string", "description": "Payment type id or name"},
                    "city": {"type": "string"},
                    "businessPurpose": {"type": "string"},
                    "vendor": {"type": "string"},
                    "comment": {"type": "string"}
                }),
                &["reportId", "expenseType", "transactionDate", "amount"],
            ),
        ),
        ToolDefinition::new(
            "delete_expense",
            "Delete an expense entry from a report.",
            object_schema(
                json!({"reportId": {"type": "string"}, "expenseId": {"type": "string"}}),
                &["reportId", "expenseId"],
            ),
        ),
        ToolDefinition::new(
            "add_attendee",
            "Create an attendee and associate it with an expense entry.",
            object_schema(
                json!({
                    "entryId": {"type": "string"},
                    "firstName": {"type": "string"},
                    "lastName": {"type": "string"},
                    "company": {"type": "string"},
                    "title": {"type": "string"},
                    "attendeeTypeId": {"type": "string"},
                    "attendeeType": {
                        "type": "string",
                        "description": "Attendee type code or name (default BUSGUEST)"
                    }
                }),
                &["entryId", "lastName"],
            ),
        ),
        ToolDefinition::new(
            "create_itemization",
            "Split part of an expense entry into an itemization.",
            object_schema(
                json!({
                    "reportId": {"type": "string"},
                    "entryId": {"type": "string"},
                    "expenseTypeCode": {"type": "string"},
                    "transactionDate": {"type": "string", "description": "YYYY-MM-DD"},
                    "amount": {"type": "number"},
                    "comment": {"type": "string"}
                }),
                &["reportId", "entryId", "expenseTypeCode", "transactionDate", "amount"],
            ),
        ),
    ]
}

pub(super) async fn list_report_expenses(
    ctx: &AppContext,
    arguments: Value,
) -> DomainResult<Value> {
    let args: ReportArgs = parse_args("list_report_expenses", arguments)?;
    to_payload(&ctx.provider().list_report_expenses(&args.report_id).await?)
}

pub(super) async fn create_expense(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let draft: ExpenseDraft = parse_args("create_expense", arguments)?;
    to_payload(&ctx.expenses.create_expense(&draft).await?)
}

pub(super) async fn delete_expense(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: DeleteArgs = parse_args("delete_expense", arguments)?;
    ctx.provider().delete_expense(&args.report_id, &args.expense_id).await?;
    Ok(json!({"deleted": true, "reportId": args.report_id, "expenseId": args.expense_id}))
}

pub(super) async fn add_attendee(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let args: AttendeeArgs = parse_args("add_attendee", arguments)?;
    let attendee_type_id = match args.attendee_type_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id,
        None => {
            let requested = args.attendee_type.as_deref().unwrap_or(DEFAULT_ATTENDEE_TYPE);
            resolve_attendee_type(ctx, requested).await?
        }
    };

    let attendee = ctx
        .provider()
        .create_attendee(&NewAttendee {
            attendee_type_id,
            first_name: args.first_name,
            last_name: args.last_name,
            company: args.company,
            title: args.title,
            external_id: None,
        })
        .await?;
    ctx.provider().associate_attendees(&args.entry_id, std::slice::from_ref(&attendee.id)).await?;

    Ok(json!({"attendee": to_payload(&attendee)?, "entryId": args.entry_id}))
}

async fn resolve_attendee_type(ctx: &AppContext, wanted: &str) -> DomainResult<String> {
    let wanted = wanted.trim();
    let types = ctx.provider().list_attendee_types().await?;

    types
        .iter()
        .find(|t| t.code.eq_ignore_ascii_case(wanted) || t.name.eq_ignore_ascii_case(wanted))
        .map(|t| t.id.clone())
        .ok_or_else(|| {
            let known: Vec<&str> = types.iter().map(|t| t.code.as_str()).collect();
            TravexError::InvalidInput(format!(
                "unknown attendee type '{wanted}' (available: {})",
                known.join(", ")
            ))
        })
}

pub(super) async fn create_itemization(ctx: &AppContext, arguments: Value) -> DomainResult<Value> {
    let itemization: NewItemization = parse_args("create_itemization", arguments)?;
    to_payload(&ctx.provider().create_itemization(&itemization).await?)
}
