//! Channel-backed dispatch queue.

use tokio::sync::mpsc;

use crate::errors::{DomainError, DomainResult};

use super::traits::DispatchQueue;
use super::types::DispatchJob;

/// In-process dispatch queue backed by an unbounded MPSC channel.
///
/// Cloning shares the same channel, so any number of request handlers can
/// enqueue into the single consumer started at boot.
#[derive(Clone)]
pub struct ChannelDispatchQueue {
    sender: mpsc::UnboundedSender<DispatchJob>,
}

/// Creates the producer/consumer pair for the dispatch channel.
///
/// The receiver half is handed to [`run_dispatch_worker`]; the queue half
/// is shared with the services that enqueue jobs.
///
/// [`run_dispatch_worker`]: super::worker::run_dispatch_worker
pub fn dispatch_channel() -> (ChannelDispatchQueue, mpsc::UnboundedReceiver<DispatchJob>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ChannelDispatchQueue { sender }, receiver)
}

impl DispatchQueue for ChannelDispatchQueue {
    fn enqueue(&self, job: DispatchJob) -> DomainResult<()> {
        // Send only fails when the consumer is gone (server shutting down).
        self.sender.send(job).map_err(|_| DomainError::Internal {
            message: "dispatch queue is closed".to_string(),
        })
    }
}
