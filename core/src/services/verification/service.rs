//! Verification workflow engine.

use std::sync::Arc;

use uuid::Uuid;

use pw_shared::config::VerificationConfig;
use pw_shared::utils::phone::mask_mobile;

use crate::domain::entities::{ImageChallenge, SmsCode};
use crate::domain::keys;
use crate::errors::{DomainResult, VerificationError};
use crate::repositories::UserRepository;
use crate::services::dispatch::{DispatchJob, DispatchQueue};

use super::traits::{ChallengeGenerator, EphemeralStore, StoreEntry};

/// Gates SMS-code issuance behind an image challenge and a cool-down, and
/// exposes read-only existence checks.
///
/// All transient state lives in the injected [`EphemeralStore`]; the
/// service itself is stateless and shared across requests.
pub struct VerificationService<S, G, U, Q>
where
    S: EphemeralStore,
    G: ChallengeGenerator,
    U: UserRepository,
    Q: DispatchQueue,
{
    store: Arc<S>,
    generator: Arc<G>,
    users: Arc<U>,
    queue: Arc<Q>,
    config: VerificationConfig,
}

impl<S, G, U, Q> VerificationService<S, G, U, Q>
where
    S: EphemeralStore,
    G: ChallengeGenerator,
    U: UserRepository,
    Q: DispatchQueue,
{
    pub fn new(
        store: Arc<S>,
        generator: Arc<G>,
        users: Arc<U>,
        queue: Arc<Q>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            store,
            generator,
            users,
            queue,
            config,
        }
    }

    /// Issue an image challenge for a caller-supplied id.
    ///
    /// Generates random challenge text and its rendered image, stores the
    /// text under `img_{challenge_id}` with the configured TTL (overwriting
    /// any previous challenge for that id) and returns the image bytes. The
    /// text itself never leaves the server except as pixels.
    pub async fn issue_image_challenge(&self, challenge_id: Uuid) -> DomainResult<Vec<u8>> {
        let generated = self.generator.generate(self.config.challenge_length)?;
        let challenge = ImageChallenge::new(challenge_id, generated.text);

        self.store
            .put(
                &challenge.cache_key(),
                &challenge.text,
                self.config.challenge_ttl_seconds,
            )
            .await?;

        tracing::debug!(
            challenge_id = %challenge.id,
            text = %challenge.text,
            "image challenge text"
        );
        tracing::info!(
            challenge_id = %challenge.id,
            event = "image_challenge_issued",
            "issued image challenge"
        );

        Ok(generated.image)
    }

    /// Whether a user with this username exists. No side effects.
    pub async fn username_exists(&self, username: &str) -> DomainResult<bool> {
        self.users.exists_by_username(username).await
    }

    /// Whether a user with this mobile number exists. No side effects.
    pub async fn mobile_exists(&self, mobile: &str) -> DomainResult<bool> {
        self.users.exists_by_mobile(mobile).await
    }

    /// Validate a challenge answer and issue an SMS code to `mobile`.
    ///
    /// Cross-field validation runs in a fixed order and stops at the first
    /// failure:
    ///
    /// 1. the mobile must not belong to a registered user;
    /// 2. the stored challenge text for `challenge_id` must equal `text`
    ///    case-sensitively — the entry is deleted on first read regardless
    ///    of the outcome, so every challenge is single-use;
    /// 3. no rate-limit flag may exist for the mobile.
    ///
    /// On success a numeric code and the rate-limit flag are written in one
    /// batch (a failed batch aborts the request and nothing is enqueued),
    /// then a dispatch job is enqueued and the call returns without waiting
    /// for delivery. The code is never returned to the caller.
    pub async fn request_sms_code(
        &self,
        mobile: &str,
        text: &str,
        challenge_id: Uuid,
    ) -> DomainResult<()> {
        // Ordering matters: a registered mobile is rejected before the
        // challenge is consumed, keeping the single-use entry intact.
        if self.users.exists_by_mobile(mobile).await? {
            tracing::info!(
                mobile = %mask_mobile(mobile),
                event = "sms_code_rejected",
                reason = "mobile_registered",
                "sms code refused for registered mobile"
            );
            return Err(VerificationError::AlreadyRegistered.into());
        }

        let challenge_key = keys::image_challenge_key(&challenge_id);
        let consumed = self
            .store
            .get(&challenge_key)
            .await?
            .map(|stored| ImageChallenge::new(challenge_id, stored));
        // Single-use: the entry is dropped before comparing, so a second
        // attempt with the same id fails no matter what text it carries.
        self.store.delete(&challenge_key).await?;

        match consumed {
            Some(challenge) if challenge.matches(text) => {}
            _ => {
                tracing::warn!(
                    mobile = %mask_mobile(mobile),
                    challenge_id = %challenge_id,
                    event = "image_challenge_failed",
                    "challenge absent, expired or text mismatch"
                );
                return Err(VerificationError::ImageChallengeFailed.into());
            }
        }

        if self
            .store
            .get(&keys::sms_flag_key(mobile))
            .await?
            .is_some()
        {
            tracing::warn!(
                mobile = %mask_mobile(mobile),
                event = "sms_code_rate_limited",
                "sms code requested again inside the cool-down window"
            );
            return Err(VerificationError::RateLimited.into());
        }

        let code = SmsCode::generate(mobile, self.config.sms_code_length);

        // Code and flag land together; a failed batch surfaces as a store
        // error and no dispatch job is enqueued.
        let entries = [
            StoreEntry::new(
                code.cache_key(),
                code.code.as_str(),
                self.config.sms_code_ttl_seconds,
            ),
            StoreEntry::new(
                code.flag_key(),
                self.config.flag_sentinel.as_str(),
                self.config.send_interval_seconds,
            ),
        ];
        self.store.put_batch(&entries).await?;

        self.queue
            .enqueue(DispatchJob::new(&code.mobile, &code.code))?;

        tracing::debug!(
            mobile = %mask_mobile(mobile),
            code = %code.code,
            "sms code text"
        );
        tracing::info!(
            mobile = %mask_mobile(mobile),
            event = "sms_code_issued",
            "sms code stored and queued for dispatch"
        );

        Ok(())
    }
}
