//! Shared utilities and common types for the PressWire server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform `{errno, errmsg, data}` response envelope
//! - Utility functions (phone validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, ServerConfig, SmsGatewayConfig,
    VerificationConfig,
};
pub use types::{ApiResponse, ErrorCode};
pub use utils::{phone, validation};
