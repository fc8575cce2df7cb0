//! Catalog Business Logic Helpers
//!
//! Validation, purchase handling and presentation helpers shared by the REST
//! handlers and the JSON-RPC layer.

use super::{
    models::{CatalogItem, PurchaseRequest, PurchaseResult},
    registry::PurchaseError,
};
use crate::{error::ValidationError, state::AppState};

/// Presence checks plus a finite, non-negative price.
///
/// The registry itself accepts anything; callers that take items from the
/// outside run this first.
pub fn validate_item(item: &CatalogItem) -> Result<(), ValidationError> {
    if item.id.trim().is_empty() {
        return Err(ValidationError::Blank { field: "id" });
    }
    if item.kind.trim().is_empty() {
        return Err(ValidationError::Blank { field: "type" });
    }
    if !item.unit_price.is_finite() || item.unit_price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(())
}

/// Orders items by id for stable responses
pub fn sorted_by_id(mut items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.sort_by(|a, b| a.id.cmp(&b.id));
    items
}

/// Runs a purchase against the registry and reports the outcome.
///
/// On success an order alert goes out on a background task when one is
/// configured; its result never changes the reply.
pub fn place_purchase(state: &AppState, request: PurchaseRequest) -> PurchaseResult {
    match state.catalog.purchase(&request.id, request.quantity) {
        Ok(item) => {
            tracing::info!(
                id = %request.id,
                quantity = request.quantity,
                remaining = item.quantity_available,
                payment_method = ?request.payment_method,
                pickup_time = ?request.pickup_time,
                "purchase completed"
            );

            send_order_alert(state, &request, &item.kind);

            PurchaseResult {
                success: true,
                message: format!("Purchased {} x {}", request.quantity, item.kind),
                remaining_quantity: item.quantity_available,
            }
        }
        Err(err) => {
            tracing::info!(id = %request.id, quantity = request.quantity, reason = %err, "purchase refused");
            refusal(err)
        }
    }
}

fn refusal(err: PurchaseError) -> PurchaseResult {
    let (message, remaining_quantity) = match err {
        PurchaseError::NotFound(id) => (format!("Egg not found: {id}"), 0),
        PurchaseError::InvalidQuantity { available } => {
            ("Quantity must be positive".to_string(), available)
        }
        PurchaseError::Insufficient { available, .. } => {
            (format!("Only {available} available"), available)
        }
    };

    PurchaseResult {
        success: false,
        message,
        remaining_quantity,
    }
}

/// Produces the one-line alert text for a completed purchase.
///
/// Example output: `"New order: 6 x Duck Egg (pickup: Saturday 9am, payment: cash)"`.
pub fn format_order_alert(request: &PurchaseRequest, kind: &str) -> String {
    let mut details = Vec::new();
    if let Some(pickup) = &request.pickup_time {
        details.push(format!("pickup: {pickup}"));
    }
    if let Some(payment) = &request.payment_method {
        details.push(format!("payment: {payment}"));
    }

    let mut text = format!("New order: {} x {}", request.quantity, kind);
    if !details.is_empty() {
        text.push_str(&format!(" ({})", details.join(", ")));
    }
    text
}

fn send_order_alert(state: &AppState, request: &PurchaseRequest, kind: &str) {
    let Some(alert) = state.config.order_alert.clone() else {
        return;
    };

    // Purchases can be placed from plain sync code; no runtime means no alert
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::warn!(id = %request.id, "order alert skipped: no async runtime");
        return;
    };

    let notifiers = state.notifiers.clone();
    let message = format_order_alert(request, kind);

    runtime.spawn(async move {
        if let Err(err) = notifiers.send_via(alert.channel, &alert.to, &message).await {
            tracing::warn!(error = %err, "order alert failed");
        }
    });
}
