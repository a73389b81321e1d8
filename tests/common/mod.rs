//! Common test utilities

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use cpf_ledger::api::{self, AppState};
use cpf_ledger::{directory, Config};
use serde_json::Value;
use tower::util::ServiceExt;

/// Router over a fresh, empty directory
pub fn setup_app() -> Router {
    setup_app_with(Config::default())
}

pub fn setup_app_with(config: Config) -> Router {
    let state = AppState::new(directory::shared(), &config);
    api::create_router(state)
}

/// Send a request, optionally with a `cpf` header and a JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cpf: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Read the response body as JSON
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Open an account, asserting success
pub async fn create_account(app: &Router, cpf: &str, name: &str) {
    let response = send(
        app,
        "POST",
        "/account",
        None,
        Some(serde_json::json!({ "cpf": cpf, "name": name })),
    )
    .await;
    assert_eq!(response.status(), 201, "account creation failed for {}", cpf);
}
