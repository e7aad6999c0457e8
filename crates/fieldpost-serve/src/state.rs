//! Application state shared across all request handlers.

use std::sync::Arc;

use fieldpost_core::Store;

use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Blog database handle.
    pub store: Store,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Open the store at the configured path and build the shared state.
    ///
    /// A database that cannot be opened is fatal; there is no partial
    /// availability mode.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::open(&config.database_path)?;

        tracing::info!(database_path = %config.database_path, "store opened");

        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }

    /// Build state over an existing store. Tests use this with an
    /// in-memory database.
    pub fn with_store(config: Config, store: Store) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
