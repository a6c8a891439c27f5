//! SMS gateway clients
//!
//! Implementations of the core `SmsGateway` seam: the Zhenzi HTTP
//! gateway for production and a logging mock for development. The
//! provider is chosen at startup from `SmsGatewayConfig`.

pub mod mock_sms;
pub mod zhenzi;

pub use mock_sms::MockSmsGateway;
pub use zhenzi::ZhenziSmsClient;

/// Message body carrying a registration code.
pub(crate) fn registration_message(code: &str) -> String {
    format!("您的注册验证码为{}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_message_embeds_code() {
        assert_eq!(registration_message("042913"), "您的注册验证码为042913");
    }
}
