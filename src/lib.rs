//! cpf_ledger Library
//!
//! Re-exports modules for the server binary, integration testing and the
//! load test tool.

pub mod api;
pub mod config;
pub mod directory;
pub mod domain;
pub mod handlers;
mod error;

pub use config::Config;
pub use directory::{AccountDirectory, SharedDirectory};
pub use domain::{Amount, AmountError, Balance, Cpf, Customer, DomainError};
pub use domain::{EntryType, Statement, StatementEntry};
pub use error::AppError;
