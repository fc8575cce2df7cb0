//! Catalog Domain Models
//!
//! This module contains the data structures exchanged by the catalog
//! registry, the REST handlers and the JSON-RPC layer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A sellable catalog entry (an egg variant)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Registry key, unique within the catalog
    pub id: String,

    /// Human-readable label (e.g. "Duck Egg")
    #[serde(rename = "type")]
    pub kind: String,

    /// Price per egg
    #[serde(rename = "price")]
    pub unit_price: f64,

    /// Eggs currently in stock
    pub quantity_available: u32,

    /// Optional free text shown next to the item
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /eggs/{id}`; the id comes from the path
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(rename = "type")]
    pub kind: String,

    pub price: f64,

    pub quantity_available: u32,

    #[serde(default)]
    pub description: Option<String>,
}

impl ItemInput {
    pub fn into_item(self, id: String) -> CatalogItem {
        CatalogItem {
            id,
            kind: self.kind,
            unit_price: self.price,
            quantity_available: self.quantity_available,
            description: self.description,
        }
    }
}

/// A request to buy `quantity` eggs of item `id`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub id: String,

    /// Signed so that zero or negative requests can be reported back
    pub quantity: i64,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub pickup_time: Option<String>,
}

/// Body of `POST /eggs/{id}/purchase`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBody {
    pub quantity: i64,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub pickup_time: Option<String>,
}

impl PurchaseBody {
    pub fn into_request(self, id: String) -> PurchaseRequest {
        PurchaseRequest {
            id,
            quantity: self.quantity,
            payment_method: self.payment_method,
            pickup_time: self.pickup_time,
        }
    }
}

/// Outcome of a purchase attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub success: bool,
    pub message: String,
    pub remaining_quantity: u32,
}
