//! Outbound HTTP senders for SMS (Twilio) and Signal

use super::models::{Notifier, NotifyError, SIGNAL_CHANNEL, SMS_CHANNEL};
use crate::config::{AlertChannel, AppConfig, SignalConfig, TwilioConfig};
use reqwest::{Client, StatusCode};
use serde_json::json;

fn transport(channel: &'static str) -> impl FnOnce(reqwest::Error) -> NotifyError {
    move |source| NotifyError::Transport { channel, source }
}

fn ensure_success(channel: &'static str, status: StatusCode) -> Result<(), NotifyError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(NotifyError::Rejected {
            channel,
            status: status.as_u16(),
        })
    }
}

// =============================================================================
// Twilio
// =============================================================================

/// Sends SMS through the Twilio Messages API
#[derive(Debug, Clone)]
pub struct SmsSender {
    client: Client,
    config: Option<TwilioConfig>,
}

impl SmsSender {
    pub fn new(client: Client, config: Option<TwilioConfig>) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }
}

impl Notifier for SmsSender {
    fn channel(&self) -> &'static str {
        SMS_CHANNEL
    }

    async fn send(&self, to: &str, message: &str) -> Result<(), NotifyError> {
        let config = self
            .config
            .as_ref()
            .ok_or(NotifyError::NotConfigured {
                channel: SMS_CHANNEL,
            })?;

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            config.api_url.trim_end_matches('/'),
            config.account_sid
        );

        let response = self
            .client
            .post(url)
            .basic_auth(&config.account_sid, Some(&config.auth_token))
            .form(&[
                ("To", to),
                ("From", config.from_number.as_str()),
                ("Body", message),
            ])
            .send()
            .await
            .map_err(transport(SMS_CHANNEL))?;

        ensure_success(SMS_CHANNEL, response.status())?;
        tracing::info!(channel = SMS_CHANNEL, to, "notification sent");
        Ok(())
    }
}

// =============================================================================
// Signal
// =============================================================================

/// Sends messages through a Signal CLI REST API instance
#[derive(Debug, Clone)]
pub struct SignalSender {
    client: Client,
    config: Option<SignalConfig>,
}

impl SignalSender {
    pub fn new(client: Client, config: Option<SignalConfig>) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    fn config(&self) -> Result<&SignalConfig, NotifyError> {
        self.config.as_ref().ok_or(NotifyError::NotConfigured {
            channel: SIGNAL_CHANNEL,
        })
    }

    /// Fetches the device-link URI used to pair this number with a phone.
    pub async fn qr_code_link(&self) -> Result<String, NotifyError> {
        let config = self.config()?;
        let url = format!("{}/v1/qrcodelink", config.api_url.trim_end_matches('/'));

        let response = self
            .client
            .get(url)
            .query(&[("device_name", config.device_name.as_str())])
            .send()
            .await
            .map_err(transport(SIGNAL_CHANNEL))?;

        // anything but a plain 200 means no link in the body
        if response.status() != StatusCode::OK {
            return Err(NotifyError::Rejected {
                channel: SIGNAL_CHANNEL,
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(transport(SIGNAL_CHANNEL))
    }
}

impl Notifier for SignalSender {
    fn channel(&self) -> &'static str {
        SIGNAL_CHANNEL
    }

    async fn send(&self, to: &str, message: &str) -> Result<(), NotifyError> {
        let config = self.config()?;

        let response = self
            .client
            .post(format!("{}/v2/send", config.api_url.trim_end_matches('/')))
            .json(&json!({
                "message": message,
                "number": config.number,
                "recipients": [to],
            }))
            .send()
            .await
            .map_err(transport(SIGNAL_CHANNEL))?;

        ensure_success(SIGNAL_CHANNEL, response.status())?;
        tracing::info!(channel = SIGNAL_CHANNEL, to, "notification sent");
        Ok(())
    }
}

// =============================================================================
// Bundle
// =============================================================================

/// Both senders over one shared HTTP client
#[derive(Debug, Clone)]
pub struct Notifiers {
    pub sms: SmsSender,
    pub signal: SignalSender,
}

impl Notifiers {
    pub fn from_config(config: &AppConfig) -> Self {
        let client = Client::new();
        Self {
            sms: SmsSender::new(client.clone(), config.twilio.clone()),
            signal: SignalSender::new(client, config.signal.clone()),
        }
    }

    pub async fn send_via(
        &self,
        channel: AlertChannel,
        to: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        match channel {
            AlertChannel::Sms => self.sms.send(to, message).await,
            AlertChannel::Signal => self.signal.send(to, message).await,
        }
    }
}
