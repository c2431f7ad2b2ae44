//! # Notification Errors
//!
//! Errors raised by subscribers. The subject logs and skips them; they
//! never reach the writer of the content.

use thiserror::Error;

/// Result type for notification operations
pub type NotifyResult<T> = Result<T, NotifyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotifyError {
    /// Message could not be built (bad address, bad header)
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Transport refused or failed to deliver
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// Subscriber could not handle the event
    #[error("Subscriber '{subscriber}' failed: {reason}")]
    Subscriber { subscriber: String, reason: String },
}

impl NotifyError {
    pub fn code(&self) -> &'static str {
        match self {
            NotifyError::InvalidMessage(_) => "NOTIFY_INVALID_MESSAGE",
            NotifyError::Delivery(_) => "NOTIFY_DELIVERY_FAILED",
            NotifyError::Subscriber { .. } => "NOTIFY_SUBSCRIBER_FAILED",
        }
    }
}
