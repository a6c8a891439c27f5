//! Verification workflow configuration module
//!
//! TTLs and sizing for the image-challenge / SMS-code flow. The challenge
//! and code windows are independent of the resend cool-down; nothing may
//! assume one outlives the other.

use serde::{Deserialize, Serialize};

/// Verification workflow configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Lifetime of a stored image challenge in seconds
    #[serde(default = "default_challenge_ttl")]
    pub challenge_ttl_seconds: u64,

    /// Number of characters in the rendered challenge text
    #[serde(default = "default_challenge_length")]
    pub challenge_length: usize,

    /// Lifetime of a stored SMS code in seconds
    #[serde(default = "default_sms_code_ttl")]
    pub sms_code_ttl_seconds: u64,

    /// Number of digits in a generated SMS code
    #[serde(default = "default_sms_code_length")]
    pub sms_code_length: usize,

    /// Cool-down between SMS-code requests for the same mobile, in seconds
    #[serde(default = "default_send_interval")]
    pub send_interval_seconds: u64,

    /// Sentinel payload stored under the rate-limit flag key
    #[serde(default = "default_flag_sentinel")]
    pub flag_sentinel: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            challenge_ttl_seconds: default_challenge_ttl(),
            challenge_length: default_challenge_length(),
            sms_code_ttl_seconds: default_sms_code_ttl(),
            sms_code_length: default_sms_code_length(),
            send_interval_seconds: default_send_interval(),
            flag_sentinel: default_flag_sentinel(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let challenge_ttl_seconds = read_env_u64("IMAGE_CODE_TTL_SECONDS", default_challenge_ttl());
        let sms_code_ttl_seconds = read_env_u64("SMS_CODE_TTL_SECONDS", default_sms_code_ttl());
        let send_interval_seconds =
            read_env_u64("SMS_SEND_INTERVAL_SECONDS", default_send_interval());
        let sms_code_length = std::env::var("SMS_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sms_code_length);

        Self {
            challenge_ttl_seconds,
            sms_code_ttl_seconds,
            send_interval_seconds,
            sms_code_length,
            ..Default::default()
        }
    }
}

fn read_env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_challenge_ttl() -> u64 {
    300 // 5 minutes
}

fn default_challenge_length() -> usize {
    4
}

fn default_sms_code_ttl() -> u64 {
    300 // 5 minutes
}

fn default_sms_code_length() -> usize {
    6
}

fn default_send_interval() -> u64 {
    60 // 1 minute
}

fn default_flag_sentinel() -> String {
    String::from("1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.challenge_ttl_seconds, 300);
        assert_eq!(config.challenge_length, 4);
        assert_eq!(config.sms_code_ttl_seconds, 300);
        assert_eq!(config.sms_code_length, 6);
        assert_eq!(config.send_interval_seconds, 60);
        assert_eq!(config.flag_sentinel, "1");
    }
}
