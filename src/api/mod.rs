//! Query/Mutation Module
//!
//! The JSON-RPC 2.0 interface over the catalog, including:
//! - Protocol models (JsonRpcRequest, method names, error codes)
//! - RPC helpers (success/error envelopes, params parsing)
//! - Method handlers (eggs, egg, purchaseEgg, upsertEgg, ping)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
