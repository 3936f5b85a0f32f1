//! Per-diem rate and calculation types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Daily reimbursement rate for a location.
///
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDiemRate {
    /// Canonical location name (e.g. "New York City")
    pub location: String,
    /// Lowercase alternate spellings matched by lookups
    pub aliases: Vec<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    pub full_day_amount: f64,
    pub partial_day_amount: f64,
    /// Fallback for unmatched queries in this rate's region
    pub is_default_for_region: bool,
}

impl PerDiemRate {
    #[must_use]
    pub fn is_us(&self) -> bool {
        self.country_code.eq_ignore_ascii_case("US")
    }
}

/// Position of a day within a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Departure day, paid at the partial rate
    First,
    /// Return day, paid at the partial rate
    Last,
    /// Any day in between, paid at the full rate
    Full,
}

impl_domain_enum_conversions!(DayType {
    First => "first",
    Last => "last",
    Full => "full",
});

impl DayType {
    #[must_use]
    pub fn is_partial(self) -> bool {
        !matches!(self, Self::Full)
    }
}

/// One day of a per-diem breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDiemDayDetail {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub rate: f64,
    pub location: String,
}

/// Result of a per-diem calculation.
///
/// `total_amount` is the sum of the breakdown rates and
/// `total_days == full_days + partial_days == breakdown.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDiemCalculation {
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    pub full_days: u32,
    pub partial_days: u32,
    pub full_day_rate: f64,
    pub partial_day_rate: f64,
    pub total_amount: f64,
    pub breakdown: Vec<PerDiemDayDetail>,
}
