//! Customer account
//!
//! A customer is identified by a system-generated id and by the
//! caller-supplied CPF, the sole authorization key. Both are fixed at
//! creation; only the name and the statement change afterwards.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::{Amount, Balance, DomainError, Statement, StatementEntry};

/// Opaque unique customer key.
///
/// Surrounding whitespace is dropped. What remains must be non-empty printable
/// ASCII, the same set a `cpf` request header can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidIdentifier(
                "cpf must not be empty".to_string(),
            ));
        }
        if !trimmed.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
            return Err(DomainError::InvalidIdentifier(
                "cpf must be printable ASCII".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Cpf {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Customer account: identity plus ordered statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: Uuid,
    cpf: Cpf,
    name: String,
    statement: Statement,
}

impl Customer {
    /// New account with a fresh id and an empty statement
    pub fn open(cpf: Cpf, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf,
            name: name.into(),
            statement: Statement::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn balance(&self) -> Balance {
        self.statement.balance()
    }

    pub fn statement_on(&self, date: NaiveDate) -> Vec<StatementEntry> {
        self.statement.on_date(date)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a credit entry. Always succeeds.
    pub fn deposit(&mut self, description: Option<String>, amount: Amount) -> &StatementEntry {
        self.append(StatementEntry::credit(description, amount))
    }

    /// Append a debit entry if the balance covers `amount`.
    ///
    /// # Errors
    /// - `DomainError::InsufficientFunds` if balance < amount; the statement is untouched
    pub fn withdraw(&mut self, amount: Amount) -> Result<&StatementEntry, DomainError> {
        let balance = self.balance();
        if !balance.is_sufficient_for(&amount) {
            return Err(DomainError::insufficient_funds(
                amount.value(),
                balance.value(),
            ));
        }

        Ok(self.append(StatementEntry::debit(amount)))
    }

    fn append(&mut self, entry: StatementEntry) -> &StatementEntry {
        self.statement.push(entry);
        // just pushed, so never empty
        &self.statement.entries()[self.statement.len() - 1]
    }
}
