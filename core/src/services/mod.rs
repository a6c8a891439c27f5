//! Business services containing the workflow logic.

pub mod dispatch;
pub mod registration;
pub mod verification;

// Re-export commonly used types
pub use dispatch::{
    dispatch_channel, run_dispatch_worker, ChannelDispatchQueue, DispatchJob, DispatchQueue,
    GatewayError, SmsGateway,
};
pub use registration::{NewRegistration, RegistrationService};
pub use verification::{
    ChallengeGenerator, EphemeralStore, GeneratedChallenge, StoreEntry, VerificationService,
};
