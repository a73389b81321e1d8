//! Ledger Handler
//!
//! Handles deposits, withdrawals and statement queries for a resolved account.

use crate::directory::SharedDirectory;
use crate::domain::{parse_date, Amount, Balance, DomainError, StatementEntry};
use crate::error::AppError;

use super::{DepositCommand, LedgerResult, WithdrawCommand};

/// Handler for ledger operations
#[derive(Debug, Clone)]
pub struct LedgerHandler {
    directory: SharedDirectory,
}

impl LedgerHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    /// Full statement in chronological order
    pub async fn statement(&self, cpf: &str) -> Result<Vec<StatementEntry>, AppError> {
        let directory = self.directory.read().await;
        Ok(directory.resolve(cpf)?.statement().entries().to_vec())
    }

    /// Entries created on the given `YYYY-MM-DD` day (UTC)
    pub async fn statement_on_date(&self, cpf: &str, date: &str) -> Result<Vec<StatementEntry>, AppError> {
        let directory = self.directory.read().await;
        let customer = directory.resolve(cpf)?;
        let date = parse_date(date)?;
        Ok(customer.statement_on(date))
    }

    pub async fn balance(&self, cpf: &str) -> Result<Balance, AppError> {
        let directory = self.directory.read().await;
        Ok(directory.resolve(cpf)?.balance())
    }

    /// Append a credit entry
    pub async fn deposit(&self, command: DepositCommand) -> Result<LedgerResult, AppError> {
        let mut directory = self.directory.write().await;
        let customer = directory.resolve_mut(&command.cpf)?;
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        customer.deposit(command.description, amount);

        Ok(LedgerResult {
            account_id: customer.id(),
            amount: amount.value(),
            balance: customer.balance().value(),
        })
    }

    /// Append a debit entry. Balance check and append happen under one write lock.
    pub async fn withdraw(&self, command: WithdrawCommand) -> Result<LedgerResult, AppError> {
        let mut directory = self.directory.write().await;
        let customer = directory.resolve_mut(&command.cpf)?;
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        customer.withdraw(amount)?;

        Ok(LedgerResult {
            account_id: customer.id(),
            amount: amount.value(),
            balance: customer.balance().value(),
        })
    }
}
