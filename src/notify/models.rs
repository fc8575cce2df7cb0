//! Notification Models
//!
//! Error type, the sender trait, and request/response bodies for the
//! notification routes.

use serde::{Deserialize, Serialize};
use std::future::Future;

/// Channel name used for the Twilio SMS sender
pub const SMS_CHANNEL: &str = "sms";
/// Channel name used for the Signal sender
pub const SIGNAL_CHANNEL: &str = "signal";

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Credentials or endpoint missing from the environment
    #[error("{channel} service not configured")]
    NotConfigured { channel: &'static str },

    /// The remote API answered with a non-2xx status
    #[error("{channel} API returned status: {status}")]
    Rejected { channel: &'static str, status: u16 },

    #[error("failed to reach {channel} API: {source}")]
    Transport {
        channel: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// A one-shot outbound message sender. No retries.
pub trait Notifier {
    fn channel(&self) -> &'static str;

    fn send(
        &self,
        to: &str,
        message: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Body of `POST /notify/sms` and `POST /notify/signal`
#[derive(Debug, Deserialize)]
pub struct NotifyInput {
    #[serde(default)]
    pub to: String,

    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub status: &'static str,
    pub channel: &'static str,
}
