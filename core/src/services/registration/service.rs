//! Registration gated by the SMS verification code.

use std::sync::Arc;

use bcrypt::{hash, DEFAULT_COST};

use pw_shared::utils::phone::{is_valid_mobile, mask_mobile};

use crate::domain::entities::User;
use crate::domain::keys;
use crate::errors::{DomainError, DomainResult, RegistrationError};
use crate::repositories::UserRepository;
use crate::services::verification::EphemeralStore;

/// Input for a registration attempt, already past field-level validation.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub username: String,
    pub password: String,
    pub password_repeat: String,
    pub mobile: String,
    pub sms_code: String,
}

/// Completes the verification workflow by turning a validated SMS code
/// into an account.
pub struct RegistrationService<S, U>
where
    S: EphemeralStore,
    U: UserRepository,
{
    store: Arc<S>,
    users: Arc<U>,
}

impl<S, U> RegistrationService<S, U>
where
    S: EphemeralStore,
    U: UserRepository,
{
    pub fn new(store: Arc<S>, users: Arc<U>) -> Self {
        Self { store, users }
    }

    /// Validate the cross-field chain and create the account.
    ///
    /// Checks run in a fixed order and stop at the first failure: mobile
    /// format, mobile unregistered, username free, passwords equal, stored
    /// SMS code equal to the submitted one. On success the password is
    /// bcrypt-hashed and the user inserted. The SMS code entry is left to
    /// expire on its own rather than being consumed.
    pub async fn register(&self, registration: NewRegistration) -> DomainResult<User> {
        let NewRegistration {
            username,
            password,
            password_repeat,
            mobile,
            sms_code,
        } = registration;

        if !is_valid_mobile(&mobile) {
            return Err(RegistrationError::InvalidMobileFormat.into());
        }

        if self.users.exists_by_mobile(&mobile).await? {
            tracing::info!(
                mobile = %mask_mobile(&mobile),
                event = "registration_rejected",
                reason = "mobile_registered",
                "registration refused for registered mobile"
            );
            return Err(RegistrationError::MobileRegistered.into());
        }

        if self.users.exists_by_username(&username).await? {
            return Err(RegistrationError::UsernameTaken.into());
        }

        if password != password_repeat {
            return Err(RegistrationError::PasswordMismatch.into());
        }

        // An absent or expired code reads the same as a wrong one.
        let stored = self.store.get(&keys::sms_code_key(&mobile)).await?;
        match stored {
            Some(ref code) if code == &sms_code => {}
            _ => {
                tracing::info!(
                    mobile = %mask_mobile(&mobile),
                    event = "registration_rejected",
                    reason = "sms_code_mismatch",
                    "registration refused, sms code absent or wrong"
                );
                return Err(RegistrationError::SmsCodeMismatch.into());
            }
        }

        let password_hash = hash(&password, DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })?;

        let user = self
            .users
            .create(User::new(username, password_hash, mobile))
            .await?;

        tracing::info!(
            user_id = %user.id,
            mobile = %mask_mobile(&user.mobile),
            event = "user_registered",
            "new account created"
        );

        Ok(user)
    }
}
