//! Asynchronous notification dispatch.
//!
//! Issuing a verification code and delivering it are decoupled: the
//! workflow engine enqueues a [`DispatchJob`] and answers the client
//! immediately, while a single worker task drains the queue and talks to
//! the SMS gateway. "Success" at the API therefore means "accepted for
//! delivery", not "delivered".

mod queue;
mod traits;
mod types;
mod worker;


pub use queue::{dispatch_channel, ChannelDispatchQueue};
pub use traits::{DispatchQueue, SmsGateway};
pub use types::{DispatchJob, GatewayError};
pub use worker::run_dispatch_worker;
