//! Account Handler
//!
//! Handles the account lifecycle: create, rename, fetch, list and delete.

use crate::directory::SharedDirectory;
use crate::domain::{Cpf, Customer};
use crate::error::AppError;

use super::{CreateAccountCommand, CreateAccountResult, RenameAccountCommand};

/// Handler for account lifecycle operations
#[derive(Debug, Clone)]
pub struct AccountHandler {
    directory: SharedDirectory,
}

impl AccountHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    /// Open a new account. Fails if the CPF is already registered.
    pub async fn create(&self, command: CreateAccountCommand) -> Result<CreateAccountResult, AppError> {
        let cpf = Cpf::parse(command.cpf)?;

        let mut directory = self.directory.write().await;
        let customer = directory.create(cpf, command.name)?;

        Ok(CreateAccountResult {
            account_id: customer.id(),
            cpf: customer.cpf().to_string(),
        })
    }

    /// Overwrite the account name
    pub async fn rename(&self, command: RenameAccountCommand) -> Result<(), AppError> {
        let mut directory = self.directory.write().await;
        directory.resolve_mut(&command.cpf)?.rename(command.name);
        Ok(())
    }

    /// Snapshot of the full account record, statement included
    pub async fn fetch(&self, cpf: &str) -> Result<Customer, AppError> {
        let directory = self.directory.read().await;
        Ok(directory.resolve(cpf)?.clone())
    }

    /// Snapshot of every account
    pub async fn list(&self) -> Vec<Customer> {
        self.directory.read().await.customers().to_vec()
    }

    /// Remove the account and return the accounts that remain
    pub async fn delete(&self, cpf: &str) -> Result<Vec<Customer>, AppError> {
        let mut directory = self.directory.write().await;
        directory.remove(cpf)?;
        Ok(directory.customers().to_vec())
    }
}
