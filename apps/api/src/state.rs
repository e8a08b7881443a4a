//! Application state management.
//!
//! Defines the shared application state passed to request handlers.

/// Shared application state.
///
/// Cloned per handler (inexpensive Arc clones), providing access to the
/// configuration and the PostgreSQL connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
