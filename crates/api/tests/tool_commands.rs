//! Integration tests for tool handlers
//!
//! Pure tools run without any mock expectations; provider-backed tools run
//! against a WireMock Concur server.

#[path = "support.rs"]
mod support;

use serde_json::json;
use support::{setup_test_context, USER_ID};
use travex_domain::TravexError;
use travex_lib::call_tool;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn calculate_per_diem_for_nyc_three_days() {
    let (ctx, _server) = setup_test_context().await;

    let payload = call_tool(
        &ctx,
        "calculate_per_diem",
        json!({"startDate": "2024-03-10", "endDate": "2024-03-12", "location": "New York"}),
    )
    .await
    .unwrap();

    assert_eq!(payload["totalDays"], 3);
    assert_eq!(payload["fullDays"], 1);
    assert_eq!(payload["partialDays"], 2);
    assert_eq!(payload["totalAmount"], 230.0);
    assert_eq!(payload["breakdown"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn calculate_per_diem_rejects_reversed_dates() {
    let (ctx, _server) = setup_test_context().await;

    let err = call_tool(
        &ctx,
        "calculate_per_diem",
        json!({"startDate": "2024-03-12", "endDate": "2024-03-10", "location": "Boston"}),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TravexError::InvalidDateRange(_)));
}

#[tokio::test]
async fn find_per_diem_rate_falls_back_to_international_default() {
    let (ctx, _server) = setup_test_context().await;

    let rate =
        call_tool(&ctx, "find_per_diem_rate", json!({"location": "Reykjavik"})).await.unwrap();

    assert_eq!(rate["location"], "International Standard");
    assert_eq!(rate["fullDayAmount"], 70.0);
}

#[tokio::test]
async fn unknown_tool_and_bad_arguments_are_errors() {
    let (ctx, _server) = setup_test_context().await;

    let err = call_tool(&ctx, "book_flight", json!({})).await.unwrap_err();
    assert!(matches!(err, TravexError::NotFound(_)));

    let err = call_tool(&ctx, "get_report", json!({"id": "R1"})).await.unwrap_err();
    assert!(matches!(err, TravexError::InvalidInput(_)));
}

#[tokio::test]
async fn reconcile_charges_uses_default_window() {
    let (ctx, _server) = setup_test_context().await;

    let payload = call_tool(
        &ctx,
        "reconcile_charges",
        json!({
            "trips": [
                {"id": "T1", "name": "NYC", "startDate": "2024-03-10", "endDate": "2024-03-12"}
            ],
            "charges": [
                {"id": "C1", "date": "2024-03-09", "amount": 12.5},
                {"id": "C2", "date": "2024-03-20", "amount": 40.0}
            ]
        }),
    )
    .await
    .unwrap();

    assert_eq!(payload["matched"].as_array().unwrap().len(), 1);
    assert_eq!(payload["matched"][0]["withinTripDates"], false);
    assert_eq!(payload["unmatched"][0]["id"], "C2");
    assert_eq!(payload["windowDays"], 1);
}

#[tokio::test]
async fn reconcile_charges_rejects_huge_window() {
    let (ctx, _server) = setup_test_context().await;

    let err = call_tool(
        &ctx,
        "reconcile_charges",
        json!({
            "trips": [
                {"id": "T1", "name": "NYC", "startDate": "2024-03-10", "endDate": "2024-03-12"}
            ],
            "charges": [{"id": "C1", "date": "2024-03-09", "amount": 12.5}],
            "windowDays": 1_000_000_000_i64
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TravexError::InvalidInput(_)), "got {err:?}");
}

#[tokio::test]
async fn calculate_per_diem_rejects_multi_year_range() {
    let (ctx, _server) = setup_test_context().await;

    let err = call_tool(
        &ctx,
        "calculate_per_diem",
        json!({"startDate": "0001-01-01", "endDate": "9999-12-31", "location": "NYC"}),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TravexError::InvalidDateRange(_)), "got {err:?}");
}

#[tokio::test]
async fn create_per_diem_expenses_creates_one_entry_per_day() {
    let (ctx, server) = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/api/v3.0/expense/expensegroupconfigurations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Items": [{"PaymentTypes": [{"ID": "CASH", "Name": "Cash", "IsDefault": true}]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3.0/common/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Items": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3.0/expense/entries"))
        .and(body_partial_json(json!({"ExpenseTypeCode": "PDIEM", "PaymentTypeID": "CASH"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": "E"})))
        .expect(2)
        .mount(&server)
        .await;

    let payload = call_tool(
        &ctx,
        "create_per_diem_expenses",
        json!({
            "reportId": "R1",
            "startDate": "2024-03-10",
            "endDate": "2024-03-11",
            "location": "Boston"
        }),
    )
    .await
    .unwrap();

    assert_eq!(payload["createdCount"], 2);
    assert_eq!(payload["complete"], true);
    assert_eq!(payload["calculation"]["totalAmount"], 36.0);
}

#[tokio::test]
async fn list_report_expenses_goes_through_provider() {
    let (ctx, server) = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/expensereports/v4/users/{USER_ID}/context/TRAVELER/reports/R1/expenses"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"expenseId": "E1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = call_tool(&ctx, "list_report_expenses", json!({"reportId": "R1"})).await.unwrap();

    assert_eq!(payload[0]["id"], "E1");
    assert_eq!(payload[0]["reportId"], "R1");
}

#[tokio::test]
async fn add_attendee_resolves_default_type_and_associates() {
    let (ctx, server) = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/api/v3.0/expense/attendeetypes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Items": [
                {"ID": "AT-1", "Code": "EMPLOYEE", "Name": "Employee"},
                {"ID": "AT-2", "Code": "BUSGUEST", "Name": "Business Guest"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3.0/expense/attendees"))
        .and(body_partial_json(json!({"AttendeeTypeID": "AT-2", "LastName": "Hopper"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": "ATT-9"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3.0/expense/entryattendeeassociations"))
        .and(body_partial_json(json!({"EntryID": "E1", "AttendeeID": "ATT-9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": "A"})))
        .expect(1)
        .mount(&server)
        .await;

    let payload = call_tool(
        &ctx,
        "add_attendee",
        json!({"entryId": "E1", "firstName": "Grace", "lastName": "Hopper"}),
    )
    .await
    .unwrap();

    assert_eq!(payload["attendee"]["id"], "ATT-9");
}

#[tokio::test]
async fn upload_receipt_rejects_invalid_base64() {
    let (ctx, _server) = setup_test_context().await;

    let err = call_tool(
        &ctx,
        "upload_receipt",
        json!({"entryId": "E1", "contentType": "image/png", "data": "***"}),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TravexError::InvalidInput(_)));
}
