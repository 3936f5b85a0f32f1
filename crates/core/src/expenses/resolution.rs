//! Identifier resolution for expense creation
//!
//! Callers name expense and payment types loosely (code, id or display
//! name). These helpers map that text onto the provider's identifiers.

use travex_domain::constants::DEFAULT_PAYMENT_TYPE;
use travex_domain::{ExpenseType, PaymentType};

/// Find an expense type by code or name.
///
/// Exact code/name matches (case-insensitive) win over a name that merely
/// contains the query.
#[must_use]
pub fn resolve_expense_type<'a>(types: &'a [ExpenseType], query: &str) -> Option<&'a ExpenseType> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    types
        .iter()
        .find(|t| t.code.eq_ignore_ascii_case(query) || t.name.eq_ignore_ascii_case(query))
        .or_else(|| {
            let needle = query.to_lowercase();
            types.iter().find(|t| t.name.to_lowercase().contains(&needle))
        })
}

/// Pick the payment type id for a new expense.
///
/// A requested type is matched by id or name; an unrecognised request is
/// passed through as-is. Without a request the provider's default is used,
/// falling back to `CASH`.
#[must_use]
pub fn resolve_payment_type(types: &[PaymentType], requested: Option<&str>) -> String {
    match requested.map(str::trim).filter(|r| !r.is_empty()) {
        Some(requested) => types
            .iter()
            .find(|p| {
                p.id.eq_ignore_ascii_case(requested) || p.name.eq_ignore_ascii_case(requested)
            })
            .map_or_else(|| requested.to_string(), |p| p.id.clone()),
        None => types
            .iter()
            .find(|p| p.is_default)
            .map_or_else(|| DEFAULT_PAYMENT_TYPE.to_string(), |p| p.id.clone()),
    }
}
