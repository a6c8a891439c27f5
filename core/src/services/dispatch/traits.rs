//! Seams between the dispatch boundary and its collaborators.

use async_trait::async_trait;

use crate::errors::DomainResult;

use super::types::{DispatchJob, GatewayError};

/// Producer side of the dispatch queue.
///
/// `enqueue` returns as soon as the job is accepted. Delivery happens
/// out-of-band; its outcome is never reported back to the enqueuing
/// request, which has already been answered.
pub trait DispatchQueue: Send + Sync {
    fn enqueue(&self, job: DispatchJob) -> DomainResult<()>;
}

/// Outbound SMS gateway client.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send `code` to `mobile` inside the registration message template.
    async fn send_code(&self, mobile: &str, code: &str) -> Result<(), GatewayError>;
}
