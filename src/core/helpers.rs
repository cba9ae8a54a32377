use regex::Regex;
use std::sync::OnceLock;

use crate::config::*;
use crate::core::errors::StoreError;
use crate::core::ids::UserId;

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Regex should compile")
    })
}

/// Wire ids are strings; anything but the canonical decimal spelling names no user.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.parse::<UserId>().ok()
}

fn invalid(msg: &str) -> StoreError {
    StoreError::Validation(msg.to_string())
}

pub fn validate_new_user(username: &str, email: &str, password: &str) -> Result<(), StoreError> {
    if username.trim().is_empty() {
        return Err(invalid("Username is required"));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(invalid("Username must be at most 50 characters"));
    }
    if !email_regex().is_match(email) {
        return Err(invalid("Invalid email"));
    }
    if password.is_empty() {
        return Err(invalid("Password is required"));
    }
    Ok(())
}

pub fn validate_post_content(content: &str) -> Result<(), StoreError> {
    if content.trim().is_empty() || content.chars().count() > MAX_POST_LENGTH {
        return Err(invalid("Invalid content"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_user() {
        assert!(validate_new_user("alice", "a@x.com", "pw").is_ok());
    }

    #[test]
    fn test_rejects_bad_user_fields() {
        assert_eq!(
            validate_new_user("  ", "a@x.com", "pw"),
            Err(StoreError::Validation("Username is required".to_string()))
        );
        assert!(validate_new_user(&"u".repeat(51), "a@x.com", "pw").is_err());
        assert!(validate_new_user("alice", "not-an-email", "pw").is_err());
        assert!(validate_new_user("alice", "a b@x.com", "pw").is_err());
        assert!(validate_new_user("alice", "a@x.com", "").is_err());
    }

    #[test]
    fn test_post_content_bounds() {
        assert!(validate_post_content("hello").is_ok());
        assert!(validate_post_content(&"a".repeat(MAX_POST_LENGTH)).is_ok());
        assert!(validate_post_content(&"a".repeat(MAX_POST_LENGTH + 1)).is_err());
        assert!(validate_post_content("").is_err());
        assert!(validate_post_content("   ").is_err());
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1"), Some(UserId::from(1)));
        assert_eq!(parse_user_id("1.0"), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("01"), None);
        assert_eq!(parse_user_id("+1"), None);
        assert_eq!(parse_user_id(" 1 "), None);
    }

    #[test]
    fn test_now_iso_is_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(&now_iso()).is_ok());
    }
}
