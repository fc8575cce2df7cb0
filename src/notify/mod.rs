//! Notification Module
//!
//! Outbound SMS and Signal messaging used to alert customers or the farm:
//! - Models (NotifyError, the Notifier trait, request bodies)
//! - Senders (Twilio SMS, Signal CLI REST API)
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod senders;

pub use handlers::routes;
pub use models::{Notifier, NotifyError};
pub use senders::{Notifiers, SignalSender, SmsSender};
