//! Command definitions
//!
//! Commands represent intentions to change the system state.

use rust_decimal::Decimal;
use uuid::Uuid;

// =========================================================================
// Account lifecycle
// =========================================================================

/// Command to open a new customer account
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub cpf: String,
    pub name: String,
}

impl CreateAccountCommand {
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
        }
    }
}

/// Command to change the display name of an account
#[derive(Debug, Clone)]
pub struct RenameAccountCommand {
    pub cpf: String,
    pub name: String,
}

impl RenameAccountCommand {
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
        }
    }
}

// =========================================================================
// Ledger
// =========================================================================

/// Command to credit an account
#[derive(Debug, Clone)]
pub struct DepositCommand {
    pub cpf: String,
    /// Raw amount, validated into an `Amount` by the handler
    pub amount: Decimal,
    pub description: Option<String>,
}

impl DepositCommand {
    pub fn new(cpf: impl Into<String>, amount: Decimal) -> Self {
        Self {
            cpf: cpf.into(),
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

/// Command to debit an account
#[derive(Debug, Clone)]
pub struct WithdrawCommand {
    pub cpf: String,
    pub amount: Decimal,
}

impl WithdrawCommand {
    pub fn new(cpf: impl Into<String>, amount: Decimal) -> Self {
        Self {
            cpf: cpf.into(),
            amount,
        }
    }
}

/// Result of a successful account creation
#[derive(Debug, Clone)]
pub struct CreateAccountResult {
    pub account_id: Uuid,
    pub cpf: String,
}

/// Result of a successful deposit or withdrawal
#[derive(Debug, Clone)]
pub struct LedgerResult {
    pub account_id: Uuid,
    pub amount: Decimal,
    pub balance: Decimal,
}
