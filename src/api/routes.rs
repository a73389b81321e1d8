//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{Balance, Customer, DomainError, StatementEntry};
use crate::error::AppError;
use crate::handlers::{CreateAccountCommand, DepositCommand, RenameAccountCommand, WithdrawCommand};

use super::extract::Json;
use super::middleware::{require_customer, AuthorizedCustomer};
use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameAccountRequest {
    pub name: String,
}

/// Amount as sent by the client: a JSON number or a numeric string.
///
/// Kept raw until the handler runs so a non-numeric value is reported as
/// `invalid_amount` rather than as a body decoding failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RequestAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RequestAmount {
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        let text = match self {
            RequestAmount::Number(number) => number.to_string(),
            RequestAmount::Text(text) => text.trim().to_string(),
        };

        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| DomainError::InvalidAmount(format!("not a decimal number: {}", text)))
    }
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(default)]
    pub description: Option<String>,
    pub amount: RequestAmount,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: RequestAmount,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: Balance,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router.
///
/// Every route except account creation and the full listing sits behind the
/// CPF gate.
pub fn create_router(state: AppState) -> Router {
    let gate = middleware::from_fn_with_state(state.clone(), require_customer);

    Router::new()
        .route("/account", post(create_account))
        .route(
            "/account",
            get(get_account)
                .put(rename_account)
                .delete(delete_account)
                .route_layer(gate.clone()),
        )
        .route("/accounts", get(list_accounts))
        .route("/statement", get(get_statement).route_layer(gate.clone()))
        .route(
            "/statement/date",
            get(get_statement_by_date).route_layer(gate.clone()),
        )
        .route("/deposit", post(deposit).route_layer(gate.clone()))
        .route("/withdraw", post(withdraw).route_layer(gate.clone()))
        .route("/balance", get(get_balance).route_layer(gate))
        .with_state(state)
}

// =========================================================================
// POST /account
// =========================================================================

/// Open a new account
async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<StatusCode, AppError> {
    let result = state
        .accounts()
        .create(CreateAccountCommand::new(request.cpf, request.name))
        .await?;

    tracing::info!(account_id = %result.account_id, "Account created");

    Ok(StatusCode::CREATED)
}

// =========================================================================
// GET /statement
// =========================================================================

async fn get_statement(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
) -> Result<Json<Vec<StatementEntry>>, AppError> {
    let statement = state.ledger().statement(&customer.cpf).await?;
    Ok(Json(statement))
}

// =========================================================================
// POST /deposit
// =========================================================================

async fn deposit(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
    Json(request): Json<DepositRequest>,
) -> Result<StatusCode, AppError> {
    let amount = request.amount.to_decimal()?;
    let command = DepositCommand::new(customer.cpf, amount);
    let command = if let Some(description) = request.description {
        command.with_description(description)
    } else {
        command
    };

    let result = state.ledger().deposit(command).await?;

    tracing::debug!(
        account_id = %result.account_id,
        amount = %result.amount,
        balance = %result.balance,
        "Deposit recorded"
    );

    Ok(StatusCode::CREATED)
}

// =========================================================================
// POST /withdraw
// =========================================================================

async fn withdraw(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
    Json(request): Json<WithdrawRequest>,
) -> Result<StatusCode, AppError> {
    let amount = request.amount.to_decimal()?;
    let result = state
        .ledger()
        .withdraw(WithdrawCommand::new(customer.cpf, amount))
        .await?;

    tracing::debug!(
        account_id = %result.account_id,
        amount = %result.amount,
        balance = %result.balance,
        "Withdrawal recorded"
    );

    Ok(StatusCode::CREATED)
}

// =========================================================================
// GET /statement/date?date=YYYY-MM-DD
// =========================================================================

async fn get_statement_by_date(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<StatementEntry>>, AppError> {
    let date = query
        .date
        .ok_or_else(|| AppError::InvalidRequest("missing date query parameter".to_string()))?;

    let statement = state.ledger().statement_on_date(&customer.cpf, &date).await?;
    Ok(Json(statement))
}

// =========================================================================
// PUT /account
// =========================================================================

async fn rename_account(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
    Json(request): Json<RenameAccountRequest>,
) -> Result<StatusCode, AppError> {
    state
        .accounts()
        .rename(RenameAccountCommand::new(customer.cpf, request.name))
        .await?;

    Ok(StatusCode::CREATED)
}

// =========================================================================
// GET /account
// =========================================================================

async fn get_account(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
) -> Result<Json<Customer>, AppError> {
    let account = state.accounts().fetch(&customer.cpf).await?;
    Ok(Json(account))
}

// =========================================================================
// GET /accounts
// =========================================================================

/// Full directory dump. Not behind the CPF gate.
async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    if !state.list_accounts_enabled {
        return Err(AppError::ListingDisabled);
    }

    Ok(Json(state.accounts().list().await))
}

// =========================================================================
// DELETE /account
// =========================================================================

/// Remove the account and return the remaining directory
async fn delete_account(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let remaining = state.accounts().delete(&customer.cpf).await?;

    tracing::info!(remaining = remaining.len(), "Account deleted");

    Ok(Json(remaining))
}

// =========================================================================
// GET /balance
// =========================================================================

async fn get_balance(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthorizedCustomer>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = state.ledger().balance(&customer.cpf).await?;
    Ok(Json(BalanceResponse { balance }))
}
