//! API module
//!
//! HTTP routes, middleware and shared router state.

pub mod extract;
pub mod middleware;
pub mod routes;

pub use routes::create_router;

use crate::config::Config;
use crate::directory::SharedDirectory;
use crate::handlers::{AccountHandler, LedgerHandler};

/// State shared by every route
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: SharedDirectory,
    pub list_accounts_enabled: bool,
}

impl AppState {
    pub fn new(directory: SharedDirectory, config: &Config) -> Self {
        Self {
            directory,
            list_accounts_enabled: config.list_accounts_enabled,
        }
    }

    pub fn accounts(&self) -> AccountHandler {
        AccountHandler::new(self.directory.clone())
    }

    pub fn ledger(&self) -> LedgerHandler {
        LedgerHandler::new(self.directory.clone())
    }
}
