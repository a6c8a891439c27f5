//! Endpoints of the SMS verification workflow.

pub mod image_code;
pub mod mobile_check;
pub mod sms_code;
pub mod username_check;

pub use image_code::image_code;
pub use mobile_check::mobile_check;
pub use sms_code::sms_code;
pub use username_check::username_check;
