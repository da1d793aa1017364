pub mod password;
pub mod service;
pub mod token;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use token::{Claims, TokenIssuer};

/// Treats an explicit `null` the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Payload for creating an account. Absent or `null` fields deserialize as
/// empty strings so they are reported through validation.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom = "not_blank")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom = "not_blank")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Payload for a sign-in attempt.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SigninRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom = "not_blank")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Payload for renaming an account.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom = "not_blank")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom = "not_blank")]
    pub full_name: String,
    pub token: Option<String>,
}

/// Returned after a successful sign-in.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    /// Signed session token, valid for the configured number of days.
    pub token: String,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub message: String,
    pub full_name: String,
    pub email: String,
}
