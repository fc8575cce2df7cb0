//! REST API handlers for outbound notifications

use super::models::{Notifier, NotifyInput, NotifyResponse};
use crate::{
    error::{ApiError, ValidationError},
    state::SharedState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for notification operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/notify/sms", post(send_sms))
        .route("/notify/signal", post(send_signal))
        .route("/signal/qrcode", get(signal_qr_code))
}

fn validate(input: &NotifyInput) -> Result<(), ValidationError> {
    if input.to.trim().is_empty() {
        return Err(ValidationError::Blank { field: "to" });
    }
    if input.message.trim().is_empty() {
        return Err(ValidationError::Blank { field: "message" });
    }
    Ok(())
}

async fn deliver<N: Notifier>(
    notifier: &N,
    input: NotifyInput,
) -> Result<Json<NotifyResponse>, ApiError> {
    validate(&input)?;

    if let Err(err) = notifier.send(&input.to, &input.message).await {
        tracing::warn!(channel = notifier.channel(), error = %err, "notification failed");
        return Err(err.into());
    }

    Ok(Json(NotifyResponse {
        status: "sent",
        channel: notifier.channel(),
    }))
}

/// Endpoint: POST /notify/sms
async fn send_sms(
    State(state): State<SharedState>,
    Json(input): Json<NotifyInput>,
) -> Result<Json<NotifyResponse>, ApiError> {
    deliver(&state.notifiers.sms, input).await
}

/// Endpoint: POST /notify/signal
async fn send_signal(
    State(state): State<SharedState>,
    Json(input): Json<NotifyInput>,
) -> Result<Json<NotifyResponse>, ApiError> {
    deliver(&state.notifiers.signal, input).await
}

/// Endpoint: GET /signal/qrcode
/// Returns the device-link URI as plain text.
async fn signal_qr_code(State(state): State<SharedState>) -> Result<String, ApiError> {
    Ok(state.notifiers.signal.qr_code_link().await?)
}
