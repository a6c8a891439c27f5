//! Domain-specific error types for the verification workflow
//!
//! Variants carry bilingual display strings ("English | 中文"). The HTTP
//! layer extracts the Chinese half for the response envelope; logs keep the
//! full string.

use thiserror::Error;

/// Failures of the SMS-code request flow (cross-field validation steps)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Mobile already registered | 此手机号已注册，请重新输入！")]
    AlreadyRegistered,

    #[error("Image challenge failed | 图形验证失败！")]
    ImageChallengeFailed,

    #[error("SMS code requests too frequent | 获取手机短信验证码过于频繁")]
    RateLimited,
}

/// Failures of the registration flow (cross-field validation steps)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Invalid mobile format | 手机号码格式不正确！")]
    InvalidMobileFormat,

    #[error("Mobile already registered | 手机号已注册，请重新输入！")]
    MobileRegistered,

    #[error("Username already taken | 此用户名已被注册！")]
    UsernameTaken,

    #[error("Passwords do not match | 两次密码不一致！")]
    PasswordMismatch,

    #[error("SMS code incorrect | 短信验证码有误！")]
    SmsCodeMismatch,
}

/// Helper function to extract the English half of a bilingual message
pub fn extract_english_message(message: &str) -> &str {
    message.split(" | ").next().unwrap_or(message)
}

/// Helper function to extract the Chinese half of a bilingual message
pub fn extract_chinese_message(message: &str) -> &str {
    message.split(" | ").nth(1).unwrap_or(message)
}
