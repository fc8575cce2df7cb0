//! Application State
//!
//! The catalog registry, the notification senders and the configuration,
//! shared by every handler behind an `Arc`.

use crate::{
    catalog::{registry::CatalogRegistry, seed},
    config::AppConfig,
    notify::Notifiers,
};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// The single source of truth for catalog items
    pub catalog: CatalogRegistry,

    pub notifiers: Notifiers,

    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// Builds the state, seeding the catalog unless the config turns it off
    pub fn new(config: AppConfig) -> Self {
        let catalog = CatalogRegistry::new();
        if config.seed_catalog {
            seed::seed(&catalog);
        }

        tracing::debug!(static_dir = ?config.static_dir, "using static asset directory");

        Self {
            catalog,
            notifiers: Notifiers::from_config(&config),
            config,
        }
    }
}
