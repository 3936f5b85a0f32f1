//! Per-diem rate table
//!
//! Rates are immutable and loaded once per process. Lookup order:
//! 1. Exact match on the canonical name or an alias
//! 2. Substring match in either direction (entry contains query, or query
//!    contains entry)
//! 3. Region default, chosen by [`looks_domestic`]

use std::sync::Arc;

use once_cell::sync::Lazy;
use travex_domain::{PerDiemRate, Result, TravexError};

fn rate(
    location: &str,
    aliases: &[&str],
    country_code: &str,
    full_day_amount: f64,
    partial_day_amount: f64,
    is_default_for_region: bool,
) -> PerDiemRate {
    PerDiemRate {
        location: location.to_string(),
        aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        country_code: country_code.to_string(),
        full_day_amount,
        partial_day_amount,
        is_default_for_region,
    }
}

// Partial days are paid at 75% of the full M&IE rate unless the locality
// publishes a flat rate.
static STANDARD_TABLE: Lazy<Arc<RateTable>> = Lazy::new(|| {
    Arc::new(RateTable::new(vec![
        rate(
            "New York City",
            &["nyc", "new york", "manhattan", "brooklyn"],
            "US",
            92.0,
            69.0,
            false,
        ),
        rate("Boston", &["cambridge ma"], "US", 18.0, 18.0, false),
        rate("San Francisco", &["sfo", "san fran", "bay area"], "US", 79.0, 59.25, false),
        rate(
            "Washington DC",
            &["washington, dc", "district of columbia"],
            "US",
            79.0,
            59.25,
            false,
        ),
        rate("Chicago", &["chi-town"], "US", 79.0, 59.25, false),
        rate("Los Angeles", &["lax"], "US", 74.0, 55.5, false),
        rate("Seattle", &["sea-tac"], "US", 79.0, 59.25, false),
        rate("US Standard", &["conus", "continental us"], "US", 59.0, 44.25, true),
        rate("London", &["greater london"], "GB", 100.0, 75.0, false),
        rate("Paris", &["ile-de-france"], "FR", 95.0, 71.25, false),
        rate("Tokyo", &["tokyo metropolis"], "JP", 90.0, 67.5, false),
        rate("Toronto", &["gta"], "CA", 75.0, 56.25, false),
        rate("International Standard", &["oconus", "foreign"], "XX", 70.0, 52.5, true),
    ]))
});

/// Read-only collection of per-diem rates.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: Vec<PerDiemRate>,
}

impl RateTable {
    #[must_use]
    pub fn new(rates: Vec<PerDiemRate>) -> Self {
        Self { rates }
    }

    /// The built-in table shared by every calculator in the process.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD_TABLE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerDiemRate> {
        self.rates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Resolve a free-text location to a rate.
    ///
    /// Case-insensitive; never fails for user input. A blank query resolves
    /// straight to the international default.
    ///
    /// # Errors
    /// Returns [`TravexError::Config`] if the needed region default is
    /// missing from the table.
    pub fn find(&self, query: &str) -> Result<&PerDiemRate> {
        let needle = query.trim().to_lowercase();

        if !needle.is_empty() {
            if let Some(rate) = self.rates.iter().find(|r| names(r).any(|n| n == needle)) {
                return Ok(rate);
            }

            if let Some(rate) = self
                .rates
                .iter()
                .find(|r| names(r).any(|n| n.contains(&needle) || needle.contains(&n)))
            {
                return Ok(rate);
            }
        }

        let domestic = looks_domestic(&needle);
        tracing::debug!(query, domestic, "no per-diem rate matched, using region default");
        self.region_default(domestic)
    }

    fn region_default(&self, domestic: bool) -> Result<&PerDiemRate> {
        self.rates
            .iter()
            .find(|r| r.is_default_for_region && r.is_us() == domestic)
            .ok_or_else(|| {
                TravexError::Config(format!(
                    "per-diem rate table has no {} default rate",
                    if domestic { "US" } else { "international" }
                ))
            })
    }
}

/// Lowercase canonical name followed by aliases.
fn names(rate: &PerDiemRate) -> impl Iterator<Item = String> + '_ {
    std::iter::once(rate.location.to_lowercase())
        .chain(rate.aliases.iter().map(|a| a.to_lowercase()))
}

/// Heuristic for unmatched queries: does the text point at a US location?
///
/// True when the text contains `us` anywhere (so "Houston" and "Columbus"
/// count, as do "usa" and "u.s"), mentions "united states" or "america", or
/// is a single two-letter token such as a state code. Substring matching
/// also catches a few foreign names ("Mauritius"); those should be added to
/// the table explicitly.
fn looks_domestic(needle: &str) -> bool {
    if ["us", "united states", "america"].iter().any(|marker| needle.contains(marker)) {
        return true;
    }

    let mut words = needle.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty());
    matches!(
        (words.next(), words.next()),
        (Some(only), None) if only.len() == 2 && only.chars().all(|c| c.is_ascii_alphabetic())
    )
}
