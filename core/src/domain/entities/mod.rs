//! Domain entities representing core business objects.

pub mod image_challenge;
pub mod sms_code;
pub mod user;

// Re-export commonly used types
pub use image_challenge::{ImageChallenge, DEFAULT_TEXT_LENGTH};
pub use sms_code::{SmsCode, DEFAULT_CODE_LENGTH};
pub use user::User;
