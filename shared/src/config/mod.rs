//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Redis connection and retry configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `sms_gateway` - Outbound SMS gateway credentials
//! - `verification` - TTLs and sizing for the verification workflow

pub mod cache;
pub mod database;
pub mod environment;
pub mod server;
pub mod sms_gateway;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};
pub use sms_gateway::SmsGatewayConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Verification workflow configuration
    pub verification: VerificationConfig,

    /// SMS gateway configuration
    pub sms_gateway: SmsGatewayConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            sms_gateway: SmsGatewayConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            verification: VerificationConfig::from_env(),
            sms_gateway: SmsGatewayConfig::from_env(),
            cors: if environment.is_development() {
                CorsConfig::development()
            } else {
                CorsConfig::default()
            },
        }
    }
}
