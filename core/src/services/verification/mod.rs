//! Verification workflow engine.
//!
//! Implements the image-challenge → SMS-code pipeline:
//! - image challenge issuance (text stored server-side, image returned)
//! - challenge validation with single-use consumption
//! - cool-down enforcement per mobile number
//! - SMS code issuance with a batched code+flag write
//! - username/mobile existence checks

mod service;
mod traits;
mod types;


pub use service::VerificationService;
pub use traits::{ChallengeGenerator, EphemeralStore, StoreEntry};
pub use types::GeneratedChallenge;
