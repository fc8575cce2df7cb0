//! Process configuration read from the environment

use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TWILIO_API_URL: &str = "https://api.twilio.com";
pub const DEFAULT_SIGNAL_DEVICE_NAME: &str = "haileys-garden";
const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected a number between 0 and 65535")]
    InvalidPort { value: String },

    #[error("invalid {name} {value:?}: expected true or false")]
    InvalidBool { name: &'static str, value: String },

    #[error("invalid ORDER_ALERT_CHANNEL {value:?}: expected sms or signal")]
    InvalidChannel { value: String },
}

/// Credentials for the Twilio Messages API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub api_url: String,
}

/// Location and sender number of a Signal CLI REST API instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalConfig {
    pub api_url: String,
    pub number: String,
    pub device_name: String,
}

/// Channel used for purchase alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChannel {
    Sms,
    Signal,
}

/// Where purchase alerts go, if anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAlert {
    pub to: String,
    pub channel: AlertChannel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_catalog: bool,
    pub log_json: bool,
    pub twilio: Option<TwilioConfig>,
    pub signal: Option<SignalConfig>,
    pub order_alert: Option<OrderAlert>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_catalog: true,
            log_json: false,
            twilio: None,
            signal: None,
            order_alert: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        let static_dir = match get("STATIC_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                locate_static_dir(&current_dir)
            }
        };

        let seed_catalog = match get("SEED_CATALOG") {
            Some(value) => parse_bool("SEED_CATALOG", value)?,
            None => true,
        };

        let log_json = get("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        let twilio = match (
            get("TWILIO_ACCOUNT_SID"),
            get("TWILIO_AUTH_TOKEN"),
            get("TWILIO_PHONE_NUMBER"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => Some(TwilioConfig {
                account_sid,
                auth_token,
                from_number,
                api_url: get("TWILIO_API_URL")
                    .unwrap_or_else(|| DEFAULT_TWILIO_API_URL.to_string()),
            }),
            _ => None,
        };

        let signal = match (get("SIGNAL_API_URL"), get("SIGNAL_NUMBER")) {
            (Some(api_url), Some(number)) => Some(SignalConfig {
                api_url: api_url.trim_end_matches('/').to_string(),
                number,
                device_name: get("SIGNAL_DEVICE_NAME")
                    .unwrap_or_else(|| DEFAULT_SIGNAL_DEVICE_NAME.to_string()),
            }),
            _ => None,
        };

        let order_alert = match get("ORDER_ALERT_TO") {
            Some(to) => {
                let channel = match get("ORDER_ALERT_CHANNEL").as_deref() {
                    None | Some("sms") => AlertChannel::Sms,
                    Some("signal") => AlertChannel::Signal,
                    Some(other) => {
                        return Err(ConfigError::InvalidChannel {
                            value: other.to_string(),
                        })
                    }
                };
                Some(OrderAlert { to, channel })
            }
            None => None,
        };

        Ok(Self {
            port,
            static_dir,
            seed_catalog,
            log_json,
            twilio,
            signal,
            order_alert,
        })
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value }),
    }
}

/// Looks for the built frontend next to the working directory
fn locate_static_dir(current_dir: &Path) -> PathBuf {
    // 1. ./frontend/dist
    // 2. ../frontend/dist (if running from a subdir)
    // 3. Fallback to the relative path
    if current_dir.join(DEFAULT_STATIC_DIR).exists() {
        return current_dir.join(DEFAULT_STATIC_DIR);
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join(DEFAULT_STATIC_DIR).exists() {
            return parent.join(DEFAULT_STATIC_DIR);
        }
    }

    PathBuf::from(DEFAULT_STATIC_DIR)
}
