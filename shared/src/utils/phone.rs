//! Mobile number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Chinese mainland mobile number
static CHINA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

/// Route-pattern fragment for mobile path parameters (unanchored).
pub const MOBILE_ROUTE_PATTERN: &str = r"1[3-9]\d{9}";

/// Normalize a mobile number by removing common formatting characters
pub fn normalize_mobile(mobile: &str) -> String {
    mobile.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check whether a mobile number is a valid Chinese mainland number
pub fn is_valid_mobile(mobile: &str) -> bool {
    CHINA_MOBILE_REGEX.is_match(mobile)
}

/// Mask a mobile number for logging (e.g., 138****5678)
///
/// Masks the normalized digits, so arbitrary input never slices a char
/// boundary. Anything too short to mask meaningfully becomes "****".
pub fn mask_mobile(mobile: &str) -> String {
    let normalized = normalize_mobile(mobile);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
