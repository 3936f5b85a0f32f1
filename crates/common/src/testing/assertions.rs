//! Custom assertions for testing
//!
//! Provides assertion macros and functions for common testing scenarios.

// Assertions panic on failure, which is their purpose
#![allow(clippy::missing_panics_doc)]

/// Tolerance used when comparing currency amounts.
pub const MONEY_EPSILON: f64 = 0.005;

/// Assert that an error's display text contains a specific substring
///
/// # Examples
///
/// ```
/// let result: Result<(), String> = Err("create report failed: 401 Unauthorized".to_string());
/// travex_common::assert_error_contains!(result, "401");
/// ```
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($substring),
                    "Error message '{}' does not contain '{}'",
                    error_msg,
                    $substring
                );
            }
        }
    };
}

/// Assert that two currency amounts are equal to the cent
///
/// # Examples
///
/// ```
/// use travex_common::testing::assert_money_eq;
///
/// assert_money_eq(69.0 * 2.0 + 92.0 * 2.0, 322.0);
/// ```
#[track_caller]
pub fn assert_money_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < MONEY_EPSILON,
        "Amounts differ: expected {expected:.2}, got {actual:.2}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_eq_tolerates_float_noise() {
        assert_money_eq(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "Amounts differ")]
    fn money_eq_rejects_cent_difference() {
        assert_money_eq(10.00, 10.01);
    }

    #[test]
    fn error_contains_macro_matches_substring() {
        let result: Result<(), String> = Err("Token refresh failed (HTTP 400)".into());
        crate::assert_error_contains!(result, "HTTP 400");
    }
}
