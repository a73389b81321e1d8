//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Domain-specific errors
///
/// Every ledger and lifecycle operation is all-or-nothing: when one of these
/// is returned, no state was changed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// No account is registered under the given CPF
    #[error("Customer not found")]
    CustomerNotFound(String),

    /// An account with this CPF already exists
    #[error("Customer already exists!")]
    AccountAlreadyExists(String),

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },

    /// Date query string is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Amount is zero, negative, too precise or too large
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Blank CPF
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds { required, available }
    }

    /// Check if this is a lookup failure of the authorization gate
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CustomerNotFound(_))
    }

    /// Check if the request itself was malformed (retrying won't help)
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_) | Self::InvalidAmount(_) | Self::InvalidIdentifier(_)
        )
    }
}

impl From<AmountError> for DomainError {
    fn from(err: AmountError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}
