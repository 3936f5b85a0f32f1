//! Travel itinerary and card charge models used for reconciliation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A trip as reported by the itinerary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub destination: Option<String>,
}

/// A corporate card transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCharge {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeMatch {
    pub charge: CardCharge,
    pub trip_id: String,
    /// Charge date falls strictly inside the trip dates (not only the window)
    pub within_trip_dates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTotal {
    pub trip_id: String,
    pub trip_name: String,
    pub charge_count: usize,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub matched: Vec<ChargeMatch>,
    pub unmatched: Vec<CardCharge>,
    pub totals: Vec<TripTotal>,
    pub window_days: i64,
}
