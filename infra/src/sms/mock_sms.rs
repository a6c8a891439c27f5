//! Mock SMS gateway
//!
//! Logs messages instead of sending them. This is the provider used in
//! development, where the code must be readable from the logs to finish
//! a registration; the full body is only logged at debug level.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use pw_core::services::{GatewayError, SmsGateway};
use pw_shared::utils::phone::mask_mobile;

use super::registration_message;

/// Gateway that accepts every message
#[derive(Clone, Default)]
pub struct MockSmsGateway {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send_code(&self, mobile: &str, code: &str) -> Result<(), GatewayError> {
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            provider = "mock",
            mobile = %mask_mobile(mobile),
            count,
            "SMS sent (mock)"
        );
        debug!(message = %registration_message(code), "Mock gateway message body");

        Ok(())
    }
}
