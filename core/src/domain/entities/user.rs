//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Account name (5 to 20 word characters)
    pub username: String,

    /// Bcrypt hash of the account password; never serialized outward
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Mobile number the account was registered with
    pub mobile: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with a fresh id
    pub fn new(username: String, password_hash: String, mobile: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            mobile,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "alice2024".to_string(),
            "$2b$12$hash".to_string(),
            "13800001111".to_string(),
        );
        assert_eq!(user.username, "alice2024");
        assert_eq!(user.mobile, "13800001111");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "alice2024".to_string(),
            "$2b$12$hash".to_string(),
            "13800001111".to_string(),
        );
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice2024");
    }
}
