use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    /// Issued at (seconds since epoch).
    pub iat: usize,
    /// Expiration (seconds since epoch).
    pub exp: usize,
}

/// Signs and decodes HS256 session tokens with the configured secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issues a token for `user_id` that expires after the configured TTL.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Checks signature and expiry.
    ///
    /// Returns `AppError::Unauthorized` if the token is malformed, signed with
    /// another key or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Rejected session token: {}", e);
                AppError::Unauthorized("Invalid or expired token".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation_and_verification() {
        let issuer = TokenIssuer::new("test_secret_for_gen_verify", 7);
        let user_id = Uuid::new_v4();
        let token = issuer.issue(user_id, "ana@x.com").unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, "ana@x.com");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_token_expiration() {
        let expired = Claims {
            user_id: Uuid::new_v4(),
            email: "ana@x.com".into(),
            iat: (Utc::now() - Duration::days(8)).timestamp() as usize,
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret("test_secret_for_expiration".as_bytes()),
        )
        .unwrap();

        let issuer = TokenIssuer::new("test_secret_for_expiration", 7);
        assert!(matches!(issuer.verify(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_invalid_token_signature() {
        let token = TokenIssuer::new("one_secret", 7)
            .issue(Uuid::new_v4(), "ana@x.com")
            .unwrap();
        let other = TokenIssuer::new("a_completely_different_secret", 7);

        match other.verify(&token) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid or expired token"),
            other => panic!("Token signed with another key was accepted: {:?}", other),
        }
        assert!(other.verify("not-a-jwt").is_err());
    }
}
