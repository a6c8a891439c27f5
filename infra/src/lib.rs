//! # Infrastructure Layer
//!
//! Concrete implementations of the seams the core layer defines:
//!
//! - **Database**: MySQL user store using SQLx
//! - **Cache**: Redis-backed ephemeral store (plus an in-memory one for
//!   development and tests)
//! - **CAPTCHA**: JPEG challenge renderer
//! - **SMS**: Zhenzi gateway client and a mock gateway for development
//!
//! Each implementation maps its library errors into `DomainError` at the
//! trait boundary, so the core layer never sees sqlx, redis, or reqwest
//! types.

/// Cache module - ephemeral store implementations
pub mod cache;

/// CAPTCHA module - challenge image rendering
pub mod captcha;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// SMS module - outbound gateway clients
pub mod sms;

pub use cache::{MemoryStore, RedisStore};
pub use captcha::CaptchaGenerator;
pub use database::{DatabasePool, MySqlUserRepository};
pub use sms::{MockSmsGateway, ZhenziSmsClient};

/// Infrastructure-specific error types
///
/// These cover bootstrap failures (connecting, parsing URLs). Once a
/// component is wired behind a core trait, runtime failures surface as
/// `DomainError` instead.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP client error for the SMS gateway
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
