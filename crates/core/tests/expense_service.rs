//! Integration tests for `ExpenseService` against an in-memory provider

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use support::provider::InMemoryExpenseProvider;
use travex_core::{
    ExpenseDefaults, ExpenseDraft, ExpenseService, PerDiemBatchRequest, PerDiemCalculator,
};
use travex_domain::TravexError;

fn service(provider: &Arc<InMemoryExpenseProvider>) -> ExpenseService {
    ExpenseService::new(provider.clone(), PerDiemCalculator::default(), ExpenseDefaults::default())
}

fn draft(expense_type: &str) -> ExpenseDraft {
    ExpenseDraft {
        report_id: "R1".into(),
        expense_type: expense_type.into(),
        transaction_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        amount: 212.40,
        currency: Some("usd".into()),
        payment_type: None,
        city: Some("New York, NY".into()),
        business_purpose: Some("Client onsite".into()),
        vendor: Some("Hotel Example".into()),
        comment: None,
    }
}

fn batch(start: &str, end: &str) -> PerDiemBatchRequest {
    PerDiemBatchRequest {
        report_id: "R1".into(),
        start_date: start.into(),
        end_date: end.into(),
        location: "NYC".into(),
        business_purpose: None,
        currency: None,
        payment_type: None,
    }
}

#[tokio::test]
async fn create_expense_resolves_identifiers() {
    let provider = Arc::new(InMemoryExpenseProvider::with_standard_lookups());

    let created = service(&provider).create_expense(&draft("hotel")).await.unwrap();

    assert_eq!(created.entry_id, "E1");
    assert_eq!(created.expense_type_code, "LODNG");
    assert_eq!(created.payment_type_id, "CBCP");
    assert_eq!(created.location_id.as_deref(), Some("LOC-NYC"));

    let sent = &provider.created()[0];
    assert_eq!(sent.currency, "USD");
    assert_eq!(sent.expense_type_code, "LODNG");
}

#[tokio::test]
async fn unknown_expense_type_is_invalid_input() {
    let provider = Arc::new(InMemoryExpenseProvider::with_standard_lookups());

    let err = service(&provider).create_expense(&draft("Helicopter")).await.unwrap_err();

    assert!(matches!(err, TravexError::InvalidInput(_)));
    assert!(provider.created().is_empty());
}

#[tokio::test]
async fn failed_lookups_fall_back_to_requested_values() {
    let provider = Arc::new(InMemoryExpenseProvider {
        fail_lookups: true,
        ..InMemoryExpenseProvider::with_standard_lookups()
    });

    let created = service(&provider).create_expense(&draft("TAXI")).await.unwrap();

    assert_eq!(created.expense_type_code, "TAXI");
    assert_eq!(created.payment_type_id, "CASH");
    assert!(created.location_id.is_none());
}

#[tokio::test]
async fn per_diem_batch_creates_one_entry_per_day() {
    let provider = Arc::new(InMemoryExpenseProvider::with_standard_lookups());

    let result =
        service(&provider)
            .create_per_diem_expenses(&batch("2024-03-10", "2024-03-12"))
            .await
            .unwrap();

    assert!(result.is_complete());
    assert_eq!(result.created_entry_ids, vec!["E1", "E2", "E3"]);
    let amounts: Vec<f64> = provider.created().iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![69.0, 92.0, 69.0]);
    assert!(provider.created().iter().all(|e| e.expense_type_code == "PDIEM"));
    assert_eq!(provider.location_queries(), vec!["NYC"]);
}

#[tokio::test]
async fn per_diem_batch_reports_partial_progress() {
    let provider = Arc::new(InMemoryExpenseProvider {
        fail_create_at: Some(1),
        ..InMemoryExpenseProvider::with_standard_lookups()
    });

    let result =
        service(&provider)
            .create_per_diem_expenses(&batch("2024-03-10", "2024-03-12"))
            .await
            .unwrap();

    assert!(!result.is_complete());
    assert_eq!(result.created_entry_ids, vec!["E1"]);
    let failure = result.failure.unwrap();
    assert_eq!(failure.date, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    assert_eq!(failure.error.http_status(), Some(400));
}

#[tokio::test]
async fn per_diem_batch_rejects_reversed_dates_without_calls() {
    let provider = Arc::new(InMemoryExpenseProvider::with_standard_lookups());

    let err = service(&provider)
        .create_per_diem_expenses(&batch("2024-03-12", "2024-03-10"))
        .await
        .unwrap_err();

    assert!(matches!(err, TravexError::InvalidDateRange(_)));
    assert!(provider.created().is_empty());
    assert!(provider.location_queries().is_empty());
}
