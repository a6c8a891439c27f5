//! Shared fixtures for the HTTP integration tests.
//!
//! The application under test runs on the in-memory store, the mock user
//! repository and a fixed-text challenge generator, so every scenario is
//! deterministic and self-contained.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use tokio::sync::mpsc::UnboundedReceiver;

use pw_api::app::AppState;
use pw_core::domain::entities::User;
use pw_core::errors::DomainResult;
use pw_core::repositories::MockUserRepository;
use pw_core::services::dispatch::{dispatch_channel, ChannelDispatchQueue, DispatchJob};
use pw_core::services::registration::RegistrationService;
use pw_core::services::verification::{
    ChallengeGenerator, GeneratedChallenge, VerificationService,
};
use pw_infra::MemoryStore;
use pw_shared::config::VerificationConfig;

pub const CHALLENGE_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const MOBILE: &str = "13800001111";

/// Challenge generator that always produces the same text.
pub struct FixedChallengeGenerator {
    text: String,
}

impl ChallengeGenerator for FixedChallengeGenerator {
    fn generate(&self, _length: usize) -> DomainResult<GeneratedChallenge> {
        Ok(GeneratedChallenge {
            text: self.text.clone(),
            // Shortest possible JPEG stand-in: start and end marker
            image: vec![0xFF, 0xD8, 0xFF, 0xD9],
        })
    }
}

pub type TestState =
    web::Data<AppState<MemoryStore, FixedChallengeGenerator, MockUserRepository, ChannelDispatchQueue>>;

pub struct TestContext {
    pub state: TestState,
    pub store: Arc<MemoryStore>,
    pub users: Arc<MockUserRepository>,
    pub jobs: UnboundedReceiver<DispatchJob>,
}

/// An account row for seeding the mock repository.
pub fn sample_user(username: &str, mobile: &str) -> User {
    User::new(
        username.to_string(),
        "$2b$12$fixedcosthash".to_string(),
        mobile.to_string(),
    )
}

/// Build an application state whose challenges always read `challenge_text`.
pub fn test_context(challenge_text: &str) -> TestContext {
    let store = Arc::new(MemoryStore::new());
    let users = Arc::new(MockUserRepository::new());
    let generator = Arc::new(FixedChallengeGenerator {
        text: challenge_text.to_string(),
    });
    let (queue, jobs) = dispatch_channel();

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&store),
        generator,
        Arc::clone(&users),
        Arc::new(queue),
        VerificationConfig::default(),
    ));
    let registration = Arc::new(RegistrationService::new(
        Arc::clone(&store),
        Arc::clone(&users),
    ));

    TestContext {
        state: web::Data::new(AppState {
            verification,
            registration,
        }),
        store,
        users,
        jobs,
    }
}
