//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first and returns `DomainError` for infrastructure
//! failures. Implementations handle the actual database operations while
//! keeping the domain layer free of storage concerns.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use pw_core::repositories::UserRepository;
/// use pw_core::domain::entities::user::User;
/// use pw_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn exists_by_username(&self, _username: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn exists_by_mobile(&self, _mobile: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn create(&self, user: User) -> Result<User, DomainError> {
///         Ok(user)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether an account with the given username exists
    ///
    /// # Returns
    /// * `Ok(true)` - an account uses this username
    /// * `Ok(false)` - the username is free
    /// * `Err(DomainError)` - database error occurred
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether an account registered the given mobile number
    ///
    /// # Returns
    /// * `Ok(true)` - an account uses this mobile
    /// * `Ok(false)` - the mobile is free
    /// * `Err(DomainError)` - database error occurred
    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(User)` - the stored account
    /// * `Err(DomainError)` - duplicate key or database error
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
