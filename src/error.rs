//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Account listing is disabled")]
    ListingDisabled,

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),
}

/// Malformed, mistyped or missing JSON bodies all surface as `invalid_request`
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Status code and stable machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        use crate::domain::DomainError;

        match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::MissingHeader(_) => (StatusCode::BAD_REQUEST, "missing_header"),
            AppError::ListingDisabled => (StatusCode::FORBIDDEN, "listing_disabled"),

            // Every domain failure is a per-request client error
            AppError::Domain(domain_err) => {
                let code = match domain_err {
                    DomainError::CustomerNotFound(_) => "customer_not_found",
                    DomainError::AccountAlreadyExists(_) => "account_already_exists",
                    DomainError::InsufficientFunds { .. } => "insufficient_funds",
                    DomainError::InvalidDate(_) => "invalid_date",
                    DomainError::InvalidAmount(_) => "invalid_amount",
                    DomainError::InvalidIdentifier(_) => "invalid_identifier",
                };
                (StatusCode::BAD_REQUEST, code)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use crate::domain::DomainError;

        let (status, error_code) = self.status_and_code();

        let details = match &self {
            AppError::InvalidRequest(msg) => Some(msg.clone()),
            AppError::MissingHeader(header) => Some(header.clone()),
            AppError::Domain(DomainError::InvalidDate(input)) => Some(input.clone()),
            AppError::Domain(DomainError::InvalidAmount(msg)) => Some(msg.clone()),
            // CPF values never leave the server in error bodies
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
