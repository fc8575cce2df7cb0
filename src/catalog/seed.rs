//! Starter catalog loaded at process start

use super::{models::CatalogItem, registry::CatalogRegistry};

fn item(id: &str, kind: &str, price: f64, qty: u32, description: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        kind: kind.to_string(),
        unit_price: price,
        quantity_available: qty,
        description: Some(description.to_string()),
    }
}

/// The four egg varieties the farm sells out of the box
pub fn default_items() -> Vec<CatalogItem> {
    vec![
        item(
            "1",
            "Brown Chicken Egg",
            0.50,
            24,
            "Fresh brown eggs from free-range chickens",
        ),
        item(
            "2",
            "White Chicken Egg",
            0.45,
            36,
            "Fresh white eggs from cage-free hens",
        ),
        item("3", "Duck Egg", 1.25, 12, "Large duck eggs, perfect for baking"),
        item(
            "4",
            "Quail Egg",
            0.75,
            48,
            "Delicate quail eggs, great for appetizers",
        ),
    ]
}

/// Upserts every starter item into `registry`
pub fn seed(registry: &CatalogRegistry) {
    for item in default_items() {
        registry.upsert(item);
    }
    tracing::info!(items = registry.len(), "catalog seeded");
}
