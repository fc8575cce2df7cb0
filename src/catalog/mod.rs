//! Catalog Domain Module
//!
//! This module contains the egg catalog, including:
//! - Domain models (CatalogItem, purchase inputs and results)
//! - The concurrent catalog registry
//! - Starter data
//! - Business logic helpers (validation, purchases, order alerts)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod seed;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::CatalogItem;
pub use registry::{CatalogRegistry, PurchaseError};
