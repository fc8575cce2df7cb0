//! Query/Mutation Protocol Models and Constants
//!
//! JSON-RPC 2.0 envelope, method names, error codes and the parameter
//! shapes of each method.

use crate::catalog::models::CatalogItem;
use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// Method Names
// =============================================================================

/// List every catalog item
pub const METHOD_EGGS: &str = "eggs";
/// Fetch one catalog item by id
pub const METHOD_EGG: &str = "egg";
/// Buy from stock
pub const METHOD_PURCHASE_EGG: &str = "purchaseEgg";
/// Insert or replace a catalog item
pub const METHOD_UPSERT_EGG: &str = "upsertEgg";
/// Liveness check
pub const METHOD_PING: &str = "ping";

// =============================================================================
// JSON-RPC Error Codes
// =============================================================================

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Params of `egg`
#[derive(Debug, Deserialize)]
pub struct EggParams {
    pub id: String,
}

/// Params of `upsertEgg`
#[derive(Debug, Deserialize)]
pub struct UpsertEggParams {
    pub egg: CatalogItem,
}
