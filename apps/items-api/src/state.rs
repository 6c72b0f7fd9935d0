//! Application state management.
//!
//! This module defines the shared application state handed to the route
//! builders. It is cloned freely: every field is a cheap handle.

use domain_items::ItemUseCases;
use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// PostgreSQL pool; `None` with the in-memory store
    pub db: Option<DatabaseConnection>,
    /// Item use cases wired to the configured gateway
    pub use_cases: ItemUseCases,
}
