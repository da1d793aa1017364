use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account as held by the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    /// Always stored trimmed and lower-cased.
    pub email: String,
    /// bcrypt hash; never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    /// `None` until the first successful sign-in.
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(full_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email: normalize_email(&email),
            password_hash,
            created_at: Utc::now(),
            last_login: None,
        }
    }
}

/// Canonical form used for both storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation_normalizes_email() {
        let user = User::new("Ana".into(), "  Ana@X.com ".into(), "hash".into());
        assert_eq!(user.email, "ana@x.com");
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("Ana".into(), "ana@x.com".into(), "secret-hash".into());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["fullName"], "Ana");
    }
}
