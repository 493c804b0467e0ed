//! User Entity
//!
//! An account that owns pets. Usernames and emails are stored normalized.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A registered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (0 until persisted)
    pub id: i64,
    /// Normalized username (trimmed, lowercase)
    pub username: String,
    /// Normalized email (trimmed, lowercase)
    pub email: String,
    /// Encoded password hash, never sent to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation time, unix millis
    pub created_at: Option<i64>,
}

impl User {
    /// Build a new, unsaved user from raw identifiers
    pub fn new(username: &str, email: &str, password_hash: String) -> Self {
        Self {
            id: 0,
            username: normalize_identifier(username).unwrap_or_default(),
            email: normalize_identifier(email).unwrap_or_default(),
            password_hash,
            created_at: None,
        }
    }
}

impl Entity for User {
    type Id = i64;
    const KIND: &'static str = "User";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Trim and lowercase a username or email; blank input yields `None`
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("  Sarah  "), Some("sarah".to_string()));
        assert_eq!(normalize_identifier("Me@Example.COM"), Some("me@example.com".to_string()));
        assert_eq!(normalize_identifier("   "), None);
        assert_eq!(normalize_identifier(""), None);
    }

    #[test]
    fn test_user_creation_normalizes() {
        let user = User::new(" PixelFan ", " Fan@Pixel.dev", "hash".to_string());
        assert_eq!(user.id(), 0);
        assert_eq!(user.username, "pixelfan");
        assert_eq!(user.email, "fan@pixel.dev");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("pixelfan", "fan@pixel.dev", "secret-hash".to_string());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
