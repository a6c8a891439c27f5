//! Account-name validation shared by the route layer and the domain.

use once_cell::sync::Lazy;
use regex::Regex;

// Account names are 5 to 20 word characters
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w{5,20}$").unwrap());

/// Route-pattern fragment for username path parameters (unanchored).
pub const USERNAME_ROUTE_PATTERN: &str = r"\w{5,20}";

/// Check whether a username satisfies the account-name rules
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("alice2024"));
        assert!(is_valid_username("ab_12"));
        assert!(!is_valid_username("abcd")); // Too short
        assert!(!is_valid_username("a".repeat(21).as_str())); // Too long
        assert!(!is_valid_username("has space"));
    }

    #[test]
    fn test_route_pattern_matches_checker() {
        let anchored = Regex::new(&format!("^{}$", USERNAME_ROUTE_PATTERN)).unwrap();
        for candidate in ["alice2024", "abcd", "has space", "用户名五个字"] {
            assert_eq!(anchored.is_match(candidate), is_valid_username(candidate));
        }
    }
}
