//! Request and response payloads with field-level validation.
//!
//! Field checks mirror the submission forms the frontend posts: every
//! failing field contributes its first message, and the messages are joined
//! with `/` into the envelope's `errmsg`, in field declaration order.
//! Cross-field rules (registered mobile, challenge text, code comparison)
//! live in the services and stop at the first failure instead.

pub mod registration;
pub mod verification;

pub use registration::RegisterRequest;
pub use verification::{MobileCountResponse, SmsCodeRequest, UsernameCountResponse};

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationErrors;

use pw_shared::utils::phone::MOBILE_ROUTE_PATTERN;

/// Anchored mobile pattern for body fields (the route pattern, anchored).
pub(crate) static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}$", MOBILE_ROUTE_PATTERN)).unwrap());

/// Join the first message of every failing field, in declared field order.
pub(crate) fn joined_error_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in field_order {
        if let Some(first) = field_errors.get(field).and_then(|list| list.first()) {
            messages.push(
                first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string()),
            );
        }
    }

    messages.join("/")
}
