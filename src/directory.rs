//! Account Directory
//!
//! In-memory owner of every customer account. Enforces one account per CPF
//! and resolves CPFs to accounts for the authorization gate.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Cpf, Customer, DomainError};

/// Directory handle shared across request handlers.
///
/// Reads take the read lock; every mutation runs under the write lock so the
/// uniqueness and balance checks cannot interleave with another mutation.
pub type SharedDirectory = Arc<RwLock<AccountDirectory>>;

/// Create an empty shared directory
pub fn shared() -> SharedDirectory {
    Arc::new(RwLock::new(AccountDirectory::new()))
}

/// Collection of customer accounts in creation order
#[derive(Debug, Default)]
pub struct AccountDirectory {
    customers: Vec<Customer>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn contains(&self, cpf: &str) -> bool {
        self.customers.iter().any(|c| c.cpf() == cpf)
    }

    /// Resolve a CPF to its account.
    ///
    /// # Errors
    /// - `DomainError::CustomerNotFound` if no account has this CPF
    pub fn resolve(&self, cpf: &str) -> Result<&Customer, DomainError> {
        self.customers
            .iter()
            .find(|c| c.cpf() == cpf)
            .ok_or_else(|| DomainError::CustomerNotFound(cpf.to_string()))
    }

    /// Mutable variant of [`resolve`](Self::resolve)
    pub fn resolve_mut(&mut self, cpf: &str) -> Result<&mut Customer, DomainError> {
        self.customers
            .iter_mut()
            .find(|c| c.cpf() == cpf)
            .ok_or_else(|| DomainError::CustomerNotFound(cpf.to_string()))
    }

    /// Open a new account.
    ///
    /// # Errors
    /// - `DomainError::AccountAlreadyExists` if the CPF is taken; nothing is inserted
    pub fn create(&mut self, cpf: Cpf, name: impl Into<String>) -> Result<&Customer, DomainError> {
        if self.contains(cpf.as_str()) {
            return Err(DomainError::AccountAlreadyExists(cpf.to_string()));
        }

        self.customers.push(Customer::open(cpf, name));
        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Every account, in creation order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Remove the account with this CPF and return it.
    ///
    /// # Errors
    /// - `DomainError::CustomerNotFound` if no account has this CPF
    pub fn remove(&mut self, cpf: &str) -> Result<Customer, DomainError> {
        let position = self
            .customers
            .iter()
            .position(|c| c.cpf() == cpf)
            .ok_or_else(|| DomainError::CustomerNotFound(cpf.to_string()))?;

        Ok(self.customers.remove(position))
    }
}
