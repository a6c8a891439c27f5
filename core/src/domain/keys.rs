//! Cache key construction for verification state
//!
//! Correlation across the workflow is purely key-naming convention: the
//! challenge id and the mobile number are the only join points. Key shapes
//! are part of the wire contract with operational tooling and must not
//! change.

use uuid::Uuid;

/// Key holding the challenge text for an issued image challenge.
pub fn image_challenge_key(challenge_id: &Uuid) -> String {
    format!("img_{}", challenge_id)
}

/// Key holding the SMS code issued to a mobile number.
pub fn sms_code_key(mobile: &str) -> String {
    format!("sms_{}", mobile)
}

/// Key whose mere presence blocks a repeated SMS-code request.
pub fn sms_flag_key(mobile: &str) -> String {
    format!("sms_flag_{}", mobile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shapes() {
        let id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
        assert_eq!(
            image_challenge_key(&id),
            "img_11111111-1111-1111-1111-111111111111"
        );
        assert_eq!(sms_code_key("13800001111"), "sms_13800001111");
        assert_eq!(sms_flag_key("13800001111"), "sms_flag_13800001111");
    }
}
