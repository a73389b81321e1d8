//! Command Handlers module
//!
//! Handlers that orchestrate business operations against the shared
//! account directory. Each handler resolves the customer by CPF before
//! touching any state.

mod account_handler;
mod commands;
mod ledger_handler;


pub use account_handler::AccountHandler;
pub use commands::*;
pub use ledger_handler::LedgerHandler;
