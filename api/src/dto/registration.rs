//! Payloads for the registration endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::MOBILE_REGEX;

/// Body of `POST /register/`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom = "validate_username_length")]
    pub username: String,

    #[validate(custom = "validate_password_length")]
    pub password: String,

    #[validate(custom = "validate_password_length")]
    pub password_repeat: String,

    #[validate(
        length(equal = 11, message = "手机号长度有误！"),
        regex(path = "MOBILE_REGEX", message = "手机号码格式不正确！")
    )]
    pub mobile: String,

    #[validate(length(equal = 6, message = "短信验证码长度有误！"))]
    pub sms_code: String,
}

impl RegisterRequest {
    /// Fields that can fail validation, in form declaration order.
    pub(crate) const FIELD_ORDER: &'static [&'static str] =
        &["username", "password", "password_repeat", "mobile", "sms_code"];
}

/// Usernames carry 5 to 20 characters, with a distinct message per bound.
fn validate_username_length(username: &str) -> Result<(), ValidationError> {
    let length = username.chars().count();
    if length < 5 {
        return Err(length_error("用户名长度要大于5"));
    }
    if length > 20 {
        return Err(length_error("用户名长度要小于20"));
    }
    Ok(())
}

/// Passwords carry 6 to 20 characters, with a distinct message per bound.
fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if length < 6 {
        return Err(length_error("密码长度要大于6"));
    }
    if length > 20 {
        return Err(length_error("密码长度要小于20"));
    }
    Ok(())
}

fn length_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("length");
    error.message = Some(message.into());
    error
}
