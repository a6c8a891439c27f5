//! SMS code entity for mobile verification.

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::keys;

/// Default number of digits in a generated code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// A numeric code issued to a mobile number
///
/// The code is written to the ephemeral store alongside a rate-limit flag
/// and is later compared during registration. It is never returned to the
/// requesting client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsCode {
    /// Mobile number the code was issued to
    pub mobile: String,

    /// The numeric code (fixed digit count, leading zeros allowed)
    pub code: String,

    /// Timestamp when the code was generated
    pub created_at: DateTime<Utc>,
}

impl SmsCode {
    /// Generates a new code of `length` digits for the given mobile
    ///
    /// Digits are drawn from the OS random source; leading zeros are kept,
    /// so "042913" is a valid 6-digit code.
    pub fn generate(mobile: impl Into<String>, length: usize) -> Self {
        let mut rng = OsRng;
        let code: String = (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();

        Self {
            mobile: mobile.into(),
            code,
            created_at: Utc::now(),
        }
    }

    /// Cache key this code is stored under
    pub fn cache_key(&self) -> String {
        keys::sms_code_key(&self.mobile)
    }

    /// Cache key of the rate-limit flag issued alongside this code
    pub fn flag_key(&self) -> String {
        keys::sms_flag_key(&self.mobile)
    }

    /// Exact comparison against a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_format() {
        for _ in 0..100 {
            let sms = SmsCode::generate("13800001111", DEFAULT_CODE_LENGTH);
            assert_eq!(sms.code.len(), DEFAULT_CODE_LENGTH);
            assert!(sms.code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_respects_length() {
        assert_eq!(SmsCode::generate("13800001111", 4).code.len(), 4);
        assert_eq!(SmsCode::generate("13800001111", 8).code.len(), 8);
    }

    #[test]
    fn test_codes_vary() {
        let codes: HashSet<String> = (0..100)
            .map(|_| SmsCode::generate("13800001111", DEFAULT_CODE_LENGTH).code)
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_keys() {
        let sms = SmsCode::generate("13800001111", DEFAULT_CODE_LENGTH);
        assert_eq!(sms.cache_key(), "sms_13800001111");
        assert_eq!(sms.flag_key(), "sms_flag_13800001111");
    }

    #[test]
    fn test_matches() {
        let mut sms = SmsCode::generate("13800001111", DEFAULT_CODE_LENGTH);
        sms.code = "042913".to_string();
        assert!(sms.matches("042913"));
        assert!(!sms.matches("042914"));
    }
}
