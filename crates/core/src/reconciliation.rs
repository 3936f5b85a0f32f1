//! Card charge reconciliation against trips
//!
//! Each charge is assigned to the first trip (in input order) whose dates,
//! widened by `window_days` on both sides, contain the charge date.

use chrono::{Duration, NaiveDate};
use travex_domain::constants::MAX_RECONCILE_WINDOW_DAYS;
use travex_domain::{
    CardCharge, ChargeMatch, Reconciliation, Result, TravexError, Trip, TripTotal,
};

/// Match charges to trips and total them per trip.
///
/// Negative windows are treated as zero. Totals list every trip, including
/// trips without charges, in input order.
///
/// # Errors
/// Returns [`TravexError::InvalidInput`] if `window_days` exceeds
/// [`MAX_RECONCILE_WINDOW_DAYS`].
pub fn reconcile_charges(
    trips: &[Trip],
    charges: &[CardCharge],
    window_days: i64,
) -> Result<Reconciliation> {
    let window_days = window_days.max(0);
    if window_days > MAX_RECONCILE_WINDOW_DAYS {
        return Err(TravexError::InvalidInput(format!(
            "windowDays must be at most {MAX_RECONCILE_WINDOW_DAYS}, got {window_days}"
        )));
    }
    let window = Duration::days(window_days);

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for charge in charges {
        let trip = trips.iter().find(|t| {
            let from = t.start_date.checked_sub_signed(window).unwrap_or(NaiveDate::MIN);
            let to = t.end_date.checked_add_signed(window).unwrap_or(NaiveDate::MAX);
            from <= charge.date && charge.date <= to
        });

        match trip {
            Some(trip) => matched.push(ChargeMatch {
                charge: charge.clone(),
                trip_id: trip.id.clone(),
                within_trip_dates: trip.start_date <= charge.date && charge.date <= trip.end_date,
            }),
            None => unmatched.push(charge.clone()),
        }
    }

    let totals = trips
        .iter()
        .map(|trip| {
            let charges: Vec<&ChargeMatch> =
                matched.iter().filter(|m| m.trip_id == trip.id).collect();
            TripTotal {
                trip_id: trip.id.clone(),
                trip_name: trip.name.clone(),
                charge_count: charges.len(),
                total_amount: charges.iter().map(|m| m.charge.amount).sum(),
            }
        })
        .collect();

    tracing::debug!(
        matched = matched.len(),
        unmatched = unmatched.len(),
        window_days,
        "reconciled card charges"
    );

    Ok(Reconciliation { matched, unmatched, totals, window_days })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn trip(id: &str, start: u32, end: u32) -> Trip {
        Trip {
            id: id.into(),
            name: format!("Trip {id}"),
            start_date: date(start),
            end_date: date(end),
            destination: None,
        }
    }

    fn charge(id: &str, day: u32, amount: f64) -> CardCharge {
        CardCharge { id: id.into(), date: date(day), amount, currency: None, merchant: None }
    }

    #[test]
    fn matches_inside_trip_and_window() {
        let trips = vec![trip("T1", 10, 12)];
        let charges =
            vec![charge("C1", 11, 40.0), charge("C2", 9, 25.5), charge("C3", 14, 10.0)];

        let result = reconcile_charges(&trips, &charges, 1).unwrap();

        assert_eq!(result.matched.len(), 2);
        assert!(result.matched[0].within_trip_dates);
        assert!(!result.matched[1].within_trip_dates);
        assert_eq!(result.unmatched.len(), 1);
        assert_eq!(result.unmatched[0].id, "C3");
        assert_eq!(result.totals[0].charge_count, 2);
        assert!((result.totals[0].total_amount - 65.5).abs() < 0.005);
    }

    #[test]
    fn first_trip_wins_on_overlap() {
        let trips = vec![trip("T1", 10, 12), trip("T2", 13, 15)];
        let result = reconcile_charges(&trips, &[charge("C1", 13, 5.0)], 1).unwrap();

        assert_eq!(result.matched[0].trip_id, "T1");
        assert_eq!(result.totals[1].charge_count, 0);
    }

    #[test]
    fn zero_window_is_strict_and_negative_is_clamped() {
        let trips = vec![trip("T1", 10, 12)];
        let charges = vec![charge("C1", 9, 5.0)];

        assert_eq!(reconcile_charges(&trips, &charges, 0).unwrap().unmatched.len(), 1);
        let clamped = reconcile_charges(&trips, &charges, -3).unwrap();
        assert_eq!(clamped.unmatched.len(), 1);
        assert_eq!(clamped.window_days, 0);
    }

    #[test]
    fn oversized_window_is_rejected() {
        let trips = vec![trip("T1", 10, 12)];
        let charges = vec![charge("C1", 9, 5.0)];

        for window in [MAX_RECONCILE_WINDOW_DAYS + 1, 1_000_000_000, i64::MAX] {
            let result = reconcile_charges(&trips, &charges, window);
            assert!(matches!(result, Err(TravexError::InvalidInput(_))), "window {window}");
        }
    }

    #[test]
    fn widest_window_near_calendar_edges_does_not_overflow() {
        let edge = Trip {
            id: "EDGE".into(),
            name: "Edge".into(),
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
            destination: None,
        };

        let result =
            reconcile_charges(&[edge], &[charge("C1", 11, 1.0)], MAX_RECONCILE_WINDOW_DAYS)
                .unwrap();

        assert_eq!(result.matched.len(), 1);
        assert_eq!(result.window_days, MAX_RECONCILE_WINDOW_DAYS);
    }
}
