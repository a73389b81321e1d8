//! Domain module
//!
//! Core domain types and business logic.

pub mod amount;
pub mod customer;
pub mod error;
pub mod statement;

pub use amount::{Amount, AmountError, Balance};
pub use customer::{Cpf, Customer};
pub use error::DomainError;
pub use statement::{balance, parse_date, EntryType, Statement, StatementEntry};
