//! Consumer loop for queued SMS sends.

use std::sync::Arc;

use tokio::sync::mpsc;

use pw_shared::utils::phone::mask_mobile;

use super::traits::SmsGateway;
use super::types::{DispatchJob, GatewayError};

/// Consumes dispatch jobs until the producer side is dropped.
///
/// Every job is attempted exactly once; there is no retry. Outcomes are
/// logged and never reported back to the request that enqueued the job.
/// Jobs still queued when the server shuts down are dropped with the
/// channel.
pub async fn run_dispatch_worker<G>(mut jobs: mpsc::UnboundedReceiver<DispatchJob>, gateway: Arc<G>)
where
    G: SmsGateway,
{
    tracing::info!(event = "dispatch_worker_started", "sms dispatch worker running");

    while let Some(job) = jobs.recv().await {
        let masked = mask_mobile(&job.mobile);
        match gateway.send_code(&job.mobile, &job.code).await {
            Ok(()) => {
                tracing::info!(
                    mobile = %masked,
                    event = "sms_delivered",
                    "verification sms accepted by gateway"
                );
            }
            Err(GatewayError::Rejected { code }) => {
                tracing::warn!(
                    mobile = %masked,
                    gateway_code = code,
                    event = "sms_rejected",
                    "gateway refused verification sms"
                );
            }
            Err(GatewayError::Transport { message }) => {
                tracing::error!(
                    mobile = %masked,
                    error = %message,
                    event = "sms_transport_error",
                    "verification sms send failed"
                );
            }
        }
    }

    tracing::info!(event = "dispatch_worker_stopped", "dispatch channel closed, worker exiting");
}
