//! REST API handlers for catalog operations
//!
//! Thin translation between HTTP and the catalog registry.

use super::{helpers::*, models::*};
use crate::{error::ApiError, state::SharedState};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/eggs", get(list_eggs))
        .route("/eggs/:id", get(get_egg).put(upsert_egg))
        .route("/eggs/:id/purchase", post(purchase_egg))
}

/// Endpoint: GET /eggs
async fn list_eggs(State(state): State<SharedState>) -> Json<Vec<CatalogItem>> {
    Json(sorted_by_id(state.catalog.list()))
}

/// Endpoint: GET /eggs/{id}
async fn get_egg(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, ApiError> {
    state
        .catalog
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("egg not found: {id}")))
}

/// Endpoint: PUT /eggs/{id}
/// Replaces the whole item stored under `id`.
async fn upsert_egg(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(input): Json<ItemInput>,
) -> Result<Json<CatalogItem>, ApiError> {
    let item = input.into_item(id);
    validate_item(&item)?;

    state.catalog.upsert(item.clone());
    tracing::info!(id = %item.id, "catalog item upserted");

    Ok(Json(item))
}

/// Endpoint: POST /eggs/{id}/purchase
async fn purchase_egg(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<PurchaseBody>,
) -> Json<PurchaseResult> {
    Json(place_purchase(&state, body.into_request(id)))
}
