//! Query/Mutation route handlers
//!
//! JSON-RPC 2.0 endpoint over the catalog registry. `handle_call` is public so
//! the dispatch can be exercised without HTTP.

use super::{helpers::*, models::*};
use crate::catalog::{helpers::*, models::PurchaseRequest};
use crate::state::{AppState, SharedState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for the query/mutation endpoint
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/rpc", post(handle_rpc))
        .route("/rpc/", post(handle_rpc)) // Trailing slash safety
}

/// Endpoint: POST /rpc
async fn handle_rpc(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "rejected JSON-RPC body");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = %req.method, id = ?id, "rpc call");

    let response_body = match handle_call(&state, &req.method, params) {
        Ok(result) => rpc_success(id, result),
        Err((code, message)) => {
            if code == METHOD_NOT_FOUND {
                tracing::warn!(method = %req.method, "unknown rpc method");
            }
            rpc_error(id, code, message)
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// Method Handlers
// =============================================================================

/// Dispatches one call. Errors carry a JSON-RPC code and message.
pub fn handle_call(state: &AppState, method: &str, params: Value) -> Result<Value, (i32, String)> {
    match method {
        METHOD_EGGS => Ok(handle_eggs(state)),
        METHOD_EGG => handle_egg(state, params).map_err(invalid),
        METHOD_PURCHASE_EGG => handle_purchase_egg(state, params).map_err(invalid),
        METHOD_UPSERT_EGG => handle_upsert_egg(state, params).map_err(invalid),
        METHOD_PING => Ok(json!({})),
        _ => Err((METHOD_NOT_FOUND, "Method not found".to_string())),
    }
}

fn invalid(message: String) -> (i32, String) {
    (INVALID_PARAMS, message)
}

/// Handles `eggs` query.
fn handle_eggs(state: &AppState) -> Value {
    json!(sorted_by_id(state.catalog.list()))
}

/// Handles `egg` query; unknown ids resolve to `null`.
fn handle_egg(state: &AppState, params: Value) -> Result<Value, String> {
    let input: EggParams = parse_params(params)?;
    Ok(json!(state.catalog.get(&input.id)))
}

/// Handles `purchaseEgg` mutation.
fn handle_purchase_egg(state: &AppState, params: Value) -> Result<Value, String> {
    let input: PurchaseRequest = parse_params(params)?;
    Ok(json!(place_purchase(state, input)))
}

/// Handles `upsertEgg` mutation.
fn handle_upsert_egg(state: &AppState, params: Value) -> Result<Value, String> {
    let input: UpsertEggParams = parse_params(params)?;
    validate_item(&input.egg).map_err(|e| format!("Invalid egg: {}", e))?;

    let egg = input.egg;
    state.catalog.upsert(egg.clone());
    tracing::info!(id = %egg.id, "catalog item upserted");

    Ok(json!(egg))
}
