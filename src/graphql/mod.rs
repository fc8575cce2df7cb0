//! GraphQL Module
//!
//! The GraphQL interface over the catalog, the one the bundled frontend talks
//! to, including:
//! - Schema (Query/Mutation roots, `Egg` and `PurchaseResult` objects)
//! - Route handlers (`/graphql` endpoint, `/playground` IDE)

pub mod handlers;
pub mod schema;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use schema::{build_schema, CatalogSchema};
