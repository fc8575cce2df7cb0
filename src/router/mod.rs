//! Routing module for the egg shop application

use crate::state::SharedState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, Method},
    middleware::Next,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing::Instrument;
use uuid::Uuid;

/// Service identifier reported by the health check
pub const SERVICE_NAME: &str = "egg-shop";

/// Response header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: one span per request, tagged with a fresh request id
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let request_id = Uuid::new_v4().simple().to_string();
        let span = tracing::info_span!(
            "request",
            id = %request_id,
            method = %req.method(),
            uri = %req.uri()
        );

        async move {
            let mut res = next.run(req).await;
            let status = res.status();
            if status.is_success() {
                tracing::info!(status = status.as_u16(), "request finished");
            } else {
                tracing::warn!(status = status.as_u16(), "request failed");
            }

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            res
        }
        .instrument(span)
        .await
    });

    // Middleware: CORS. Any origin may call in with credentials, so origin
    // and headers are mirrored instead of wildcarded.
    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Fallback: built frontend, with index.html for client-side routes
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    // Routes
    Router::new()
        .merge(crate::catalog::routes())
        .merge(crate::graphql::routes())
        .merge(crate::api::routes())
        .merge(crate::notify::routes())
        .route("/health", get(health))
        .fallback_service(spa)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /health
async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "items": state.catalog.len(),
        "notifications": {
            "sms": state.notifiers.sms.is_configured(),
            "signal": state.notifiers.signal.is_configured(),
        },
    }))
}
