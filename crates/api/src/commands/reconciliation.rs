//! Card charge reconciliation tool

use serde::Deserialize;
use serde_json::{json, Value};
use travex_domain::constants::{DEFAULT_RECONCILE_WINDOW_DAYS, MAX_RECONCILE_WINDOW_DAYS};
use travex_domain::{CardCharge, Result as DomainResult, Trip};

use super::{object_schema, ToolDefinition};
use crate::utils::command_helpers::{parse_args, to_payload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReconcileArgs {
    trips: Vec<Trip>,
    charges: Vec<CardCharge>,
    #[serde(default)]
    window_days: Option<i64>,
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![ToolDefinition::new(
        "reconcile_charges",
        "Match card charges to trips by date. A charge belongs to the first trip whose dates, \
         widened by windowDays on each side, contain it.",
        object_schema(
            json!({
                "trips": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "string"},
                            "name": {"type": "string"},
                            "startDate": {"type": "string"},
                            "endDate": {"type": "string"},
                            "destination": {"type": "string"}
                        },
                        "required": ["id", "name", "startDate", "endDate"]
                    }
                },
                "charges": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "string"},
                            "date": {"type": "string"},
                            "amount": {"type": "number"},
                            "currency": {"type": "string"},
                            "merchant": {"type": "string"}
                        },
                        "required": ["id", "date", "amount"]
                    }
                },
                "windowDays": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": MAX_RECONCILE_WINDOW_DAYS,
                    "default": DEFAULT_RECONCILE_WINDOW_DAYS
                }
            }),
            &["trips", "charges"],
        ),
    )]
}

pub(super) fn reconcile_charges(arguments: Value) -> DomainResult<Value> {
    let args: ReconcileArgs = parse_args("reconcile_charges", arguments)?;
    let window = args.window_days.unwrap_or(DEFAULT_RECONCILE_WINDOW_DAYS);
    to_payload(&travex_core::reconcile_charges(&args.trips, &args.charges, window)?)
}
