//! Payloads for the verification endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::MOBILE_REGEX;

/// Body of `POST /sms_codes/`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SmsCodeRequest {
    /// Mobile number the code should be sent to
    #[validate(
        length(equal = 11, message = "手机号长度有误"),
        regex(path = "MOBILE_REGEX", message = "手机号码格式不正确")
    )]
    pub mobile: String,

    /// Answer to the image challenge
    #[validate(length(equal = 4, message = "图片验证码长度有误"))]
    pub text: String,

    /// Id of the challenge the answer belongs to
    pub image_code_id: Uuid,
}

impl SmsCodeRequest {
    /// Fields that can fail validation, in form declaration order.
    pub(crate) const FIELD_ORDER: &'static [&'static str] = &["mobile", "text"];
}

/// Payload of `GET /usernames/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameCountResponse {
    /// Number of accounts with this username (0 or 1)
    pub count: u64,

    /// The username that was checked
    pub username: String,
}

/// Payload of `GET /mobiles/{mobile}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobileCountResponse {
    /// Number of accounts with this mobile (0 or 1)
    pub count: u64,

    /// The mobile that was checked
    pub mobile: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SmsCodeRequest {
        SmsCodeRequest {
            mobile: "13800001111".to_string(),
            text: "A1B2".to_string(),
            image_code_id: Uuid::nil(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_mobile_with_bad_prefix_fails_pattern() {
        let request = SmsCodeRequest {
            mobile: "12800001111".to_string(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();
        let first = field_errors.get("mobile").unwrap().first().unwrap();
        assert_eq!(first.message.as_deref(), Some("手机号码格式不正确"));
    }

    #[test]
    fn test_challenge_text_must_be_four_chars() {
        let request = SmsCodeRequest {
            text: "A1B2C".to_string(),
            ..valid_request()
        };

        assert!(request.validate().is_err());
    }
}
