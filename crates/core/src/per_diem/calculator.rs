//! Per-diem calculation over an inclusive date range
//!
//! Day-type policy:
//! - A one-day range is a single `first` day at the partial rate
//! - Otherwise day 0 is `first`, the last day is `last` (both partial) and
//!   every day in between is `full`
//!
//! The total is the sum of each day's rate, so one- and two-day trips need no
//! special casing.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate};
use travex_domain::constants::MAX_TRIP_DAYS;
use travex_domain::{
    DayType, PerDiemCalculation, PerDiemDayDetail, PerDiemRate, Result, TravexError,
};

use super::rates::RateTable;

/// Parse a trip date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// # Errors
/// Returns [`TravexError::InvalidDateRange`] if the text is neither.
pub fn parse_trip_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| TravexError::InvalidDateRange(format!("unparseable date: {value:?}")))
}

/// Stateless calculator over a shared rate table.
#[derive(Debug, Clone)]
pub struct PerDiemCalculator {
    rates: Arc<RateTable>,
}

impl Default for PerDiemCalculator {
    fn default() -> Self {
        Self::new(RateTable::standard())
    }
}

impl PerDiemCalculator {
    #[must_use]
    pub fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Resolve a location query to a rate. See [`RateTable::find`].
    ///
    /// # Errors
    /// Returns [`TravexError::Config`] if the table lacks a region default.
    pub fn find_rate(&self, location: &str) -> Result<&PerDiemRate> {
        self.rates.find(location)
    }

    /// Calculate per diem for textual dates.
    ///
    /// # Errors
    /// Returns [`TravexError::InvalidDateRange`] for unparseable dates or an
    /// end date before the start date.
    pub fn calculate(
        &self,
        start_date: &str,
        end_date: &str,
        location: &str,
    ) -> Result<PerDiemCalculation> {
        let start = parse_trip_date(start_date)?;
        let end = parse_trip_date(end_date)?;
        self.calculate_range(start, end, location)
    }

    /// Calculate per diem for an inclusive date range.
    ///
    /// # Errors
    /// Returns [`TravexError::InvalidDateRange`] if `end < start` or the range
    /// covers more than [`MAX_TRIP_DAYS`] days.
    pub fn calculate_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location: &str,
    ) -> Result<PerDiemCalculation> {
        if end < start {
            return Err(TravexError::InvalidDateRange(format!(
                "end date {end} is before start date {start}"
            )));
        }

        let total_days = u32::try_from((end - start).num_days() + 1)
            .ok()
            .filter(|days| *days <= MAX_TRIP_DAYS)
            .ok_or_else(|| {
                TravexError::InvalidDateRange(format!(
                    "range {start}..={end} exceeds {MAX_TRIP_DAYS} days"
                ))
            })?;

        let rate = self.find_rate(location)?;

        let breakdown: Vec<PerDiemDayDetail> = (0..total_days)
            .map(|index| {
                let day_type = match index {
                    0 => DayType::First,
                    i if i + 1 == total_days => DayType::Last,
                    _ => DayType::Full,
                };
                PerDiemDayDetail {
                    date: start + Duration::days(i64::from(index)),
                    day_type,
                    rate: if day_type.is_partial() {
                        rate.partial_day_amount
                    } else {
                        rate.full_day_amount
                    },
                    location: rate.location.clone(),
                }
            })
            .collect();

        let partial_days =
            u32::try_from(breakdown.iter().filter(|d| d.day_type.is_partial()).count())
                .unwrap_or(total_days);
        let full_days = total_days - partial_days;
        let total_amount: f64 = breakdown.iter().map(|d| d.rate).sum();

        tracing::debug!(
            location = %rate.location,
            total_days,
            total_amount,
            "calculated per diem"
        );

        Ok(PerDiemCalculation {
            location: rate.location.clone(),
            start_date: start,
            end_date: end,
            total_days,
            full_days,
            partial_days,
            full_day_rate: rate.full_day_amount,
            partial_day_rate: rate.partial_day_amount,
            total_amount,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn three_day_nyc_trip() {
        let calc =
            PerDiemCalculator::default().calculate("2024-03-10", "2024-03-12", "NYC").unwrap();

        assert_eq!(calc.total_days, 3);
        assert_eq!(calc.full_days, 1);
        assert_eq!(calc.partial_days, 2);
        assert!(approx(calc.full_day_rate, 92.0));
        assert!(approx(calc.partial_day_rate, 69.0));
        assert!(approx(calc.total_amount, 230.0));

        let types: Vec<_> = calc.breakdown.iter().map(|d| d.day_type).collect();
        assert_eq!(types, vec![DayType::First, DayType::Full, DayType::Last]);
        assert_eq!(calc.breakdown[2].date, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    }

    #[test]
    fn single_day_is_one_partial_first_day() {
        let calc =
            PerDiemCalculator::default().calculate("2024-03-10", "2024-03-10", "Boston").unwrap();

        assert_eq!(calc.total_days, 1);
        assert_eq!(calc.full_days, 0);
        assert_eq!(calc.partial_days, 1);
        assert_eq!(calc.breakdown[0].day_type, DayType::First);
        assert!(approx(calc.total_amount, 18.0));
    }

    #[test]
    fn two_day_trip_has_first_and_last() {
        let calc =
            PerDiemCalculator::default().calculate("2024-03-10", "2024-03-11", "nyc").unwrap();

        assert_eq!(calc.full_days, 0);
        assert_eq!(calc.partial_days, 2);
        assert!(approx(calc.total_amount, 138.0));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let result = PerDiemCalculator::default().calculate("2024-03-12", "2024-03-10", "NYC");
        assert!(matches!(result, Err(TravexError::InvalidDateRange(_))));
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let result = PerDiemCalculator::default().calculate("March 10", "2024-03-10", "NYC");
        assert!(matches!(result, Err(TravexError::InvalidDateRange(_))));
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        let calc = PerDiemCalculator::default()
            .calculate("2024-03-10T08:00:00Z", "2024-03-11T22:30:00-05:00", "Paris")
            .unwrap();
        assert_eq!(calc.total_days, 2);
        assert_eq!(calc.location, "Paris");
    }

    #[test]
    fn spans_month_boundaries() {
        let calc =
            PerDiemCalculator::default().calculate("2024-02-28", "2024-03-01", "Chicago").unwrap();
        // 2024 is a leap year: 28, 29, 1
        assert_eq!(calc.total_days, 3);
    }

    #[test]
    fn longest_allowed_trip_is_accepted() {
        // 2024 is a leap year with 366 days
        let calc =
            PerDiemCalculator::default().calculate("2024-01-01", "2024-12-31", "Denver").unwrap();
        assert_eq!(calc.total_days, MAX_TRIP_DAYS);
        assert_eq!(calc.breakdown.len(), 366);
    }

    #[test]
    fn overlong_ranges_are_rejected() {
        let calculator = PerDiemCalculator::default();

        let one_over = calculator.calculate("2024-01-01", "2025-01-01", "NYC");
        assert!(matches!(one_over, Err(TravexError::InvalidDateRange(_))));

        let whole_calendar = calculator.calculate("0001-01-01", "9999-12-31", "NYC");
        assert!(matches!(whole_calendar, Err(TravexError::InvalidDateRange(_))));

        let extended_years = calculator.calculate("-262000-01-01", "+262000-12-31", "NYC");
        assert!(matches!(extended_years, Err(TravexError::InvalidDateRange(_))));
    }
}
