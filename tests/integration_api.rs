//! API Integration Tests

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

mod common;

use common::{create_account, json_body, send, setup_app, setup_app_with};

#[tokio::test]
async fn test_account_lifecycle_e2e() {
    let app = setup_app();

    // 1. Create
    create_account(&app, "111", "Alice").await;

    // 2. Duplicate is rejected
    let response = send(&app, "POST", "/account", None, Some(json!({ "cpf": "111", "name": "Other" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "account_already_exists");
    assert_eq!(body["error"], "Customer already exists!");

    // 3. Fetch
    let response = send(&app, "GET", "/account", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["cpf"], "111");
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["statement"], json!([]));

    // 4. Rename
    let response = send(&app, "PUT", "/account", Some("111"), Some(json!({ "name": "Alicia" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(send(&app, "GET", "/account", Some("111"), None).await).await;
    assert_eq!(body["name"], "Alicia");

    // 5. Delete returns the remaining directory
    create_account(&app, "222", "Bob").await;
    let response = send(&app, "DELETE", "/account", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let remaining = body.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["cpf"], "222");

    // 6. Deleted cpf no longer resolves
    let response = send(&app, "GET", "/account", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "customer_not_found");
}

#[tokio::test]
async fn test_deposit_withdraw_e2e() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;

    let response = send(
        &app,
        "POST",
        "/deposit",
        Some("111"),
        Some(json!({ "description": "Salary", "amount": 100 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "POST", "/withdraw", Some("111"), Some(json!({ "amount": 100 }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(send(&app, "GET", "/balance", Some("111"), None).await).await;
    assert_eq!(body["balance"], "0");

    // Overdraw is rejected and leaves the statement alone
    let response = send(&app, "POST", "/withdraw", Some("111"), Some(json!({ "amount": 1 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "insufficient_funds");

    let response = send(&app, "GET", "/statement", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "credit");
    assert_eq!(entries[0]["description"], "Salary");
    assert_eq!(entries[0]["amount"], "100");
    assert_eq!(entries[1]["type"], "debit");
    assert!(entries[1].get("description").is_none());
}

#[tokio::test]
async fn test_invalid_amounts_rejected() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;

    for amount in [json!(0), json!(-10), json!("0.000000001")] {
        let response = send(&app, "POST", "/deposit", Some("111"), Some(json!({ "amount": amount }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error_code"], "invalid_amount");
    }

    let body = json_body(send(&app, "GET", "/statement", Some("111"), None).await).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_non_numeric_amount_is_invalid_amount() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;

    for uri in ["/deposit", "/withdraw"] {
        let response = send(&app, "POST", uri, Some("111"), Some(json!({ "amount": "abc" }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = json_body(response).await;
        assert_eq!(body["error_code"], "invalid_amount");
    }
}

#[tokio::test]
async fn test_bad_body_gets_json_error() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;

    // No body and no content type
    let response = send(&app, "POST", "/withdraw", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "invalid_request");
    assert!(body["error"].is_string());

    // Required field missing
    let response = send(&app, "POST", "/account", None, Some(json!({ "cpf": "222" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_request");

    // Amount of the wrong JSON type
    let response = send(&app, "POST", "/deposit", Some("111"), Some(json!({ "amount": true }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_large_amounts_keep_every_digit() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;

    for amount in ["999999999999.99999999", "123456789.12345678"] {
        let response = send(&app, "POST", "/deposit", Some("111"), Some(json!({ "amount": amount }))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body = json_body(send(&app, "GET", "/statement", Some("111"), None).await).await;
    assert_eq!(body[0]["amount"], "999999999999.99999999");
    assert_eq!(body[1]["amount"], "123456789.12345678");

    let body = json_body(send(&app, "GET", "/balance", Some("111"), None).await).await;
    assert_eq!(body["balance"], "1000123456789.12345677");
}

#[tokio::test]
async fn test_created_cpf_resolves_from_header() {
    let app = setup_app();
    create_account(&app, " 111 ", "Alice").await;

    let response = send(&app, "GET", "/account", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["cpf"], "111");

    let response = send(&app, "POST", "/account", None, Some(json!({ "cpf": "22\u{e9}", "name": "Bob" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_identifier");
}

#[tokio::test]
async fn test_statement_by_date() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;
    send(&app, "POST", "/deposit", Some("111"), Some(json!({ "description": "a", "amount": 5 }))).await;

    let body = json_body(send(&app, "GET", "/statement", Some("111"), None).await).await;
    let created_at: chrono::DateTime<Utc> = body[0]["created_at"].as_str().unwrap().parse().unwrap();
    let day = created_at.date_naive().format("%Y-%m-%d");

    let response = send(&app, "GET", &format!("/statement/date?date={}", day), Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    let response = send(&app, "GET", "/statement/date?date=2000-01-01", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    let response = send(&app, "GET", "/statement/date?date=yesterday", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_date");

    let response = send(&app, "GET", "/statement/date", Some("111"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_gate_rejects_unknown_and_missing_cpf() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;

    for (method, uri) in [
        ("GET", "/statement"),
        ("GET", "/statement/date?date=2024-01-01"),
        ("GET", "/account"),
        ("DELETE", "/account"),
        ("GET", "/balance"),
    ] {
        let response = send(&app, method, uri, Some("999"), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", method, uri);
        let body = json_body(response).await;
        assert_eq!(body["error_code"], "customer_not_found");
        assert_eq!(body["error"], "Customer not found");

        let response = send(&app, method, uri, None, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error_code"], "missing_header");
    }

    // Gate runs before the body is read
    let response = send(&app, "POST", "/deposit", Some("999"), Some(json!({ "amount": 1 }))).await;
    assert_eq!(json_body(response).await["error_code"], "customer_not_found");

    // The real account is untouched
    let body = json_body(send(&app, "GET", "/accounts", None, None).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_accounts_toggle() {
    let app = setup_app();
    create_account(&app, "111", "Alice").await;
    create_account(&app, "222", "Bob").await;

    let response = send(&app, "GET", "/accounts", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 2);

    let config = cpf_ledger::Config {
        list_accounts_enabled: false,
        ..Default::default()
    };
    let locked = setup_app_with(config);
    let response = send(&locked, "GET", "/accounts", None, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["error_code"], "listing_disabled");
}
