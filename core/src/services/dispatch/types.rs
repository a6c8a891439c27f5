//! Job payload and gateway outcome types for dispatch.

use thiserror::Error;

/// A queued outbound SMS send.
///
/// The payload carries everything the worker needs; producer and consumer
/// share no other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchJob {
    /// Destination mobile number
    pub mobile: String,

    /// Numeric code embedded into the message template by the gateway client
    pub code: String,
}

impl DispatchJob {
    pub fn new(mobile: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
            code: code.into(),
        }
    }
}

/// Failure modes of a single outbound gateway call.
///
/// Both variants are terminal for the job that hit them; the worker logs
/// the outcome and moves on.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway answered but refused the send.
    #[error("gateway rejected the message with code {code}")]
    Rejected { code: i64 },

    /// The request never completed (connect, timeout, malformed response).
    #[error("gateway transport failure: {message}")]
    Transport { message: String },
}
