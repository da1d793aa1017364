use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::password::{hash_password, verify_password};
use super::token::TokenIssuer;
use super::{ProfileResponse, SigninRequest, SigninResponse, SignupRequest, UpdateProfileRequest};
use crate::error::{AppError, StoreError};
use crate::models::user::{normalize_email, User};
use crate::store::UserStore;

/// Shared by unknown-email and wrong-password failures.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

const EMAIL_TAKEN: &str = "Email already registered";

/// Account operations: signup, signin and profile updates.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
    verify_profile_token: bool,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: TokenIssuer,
        bcrypt_cost: u32,
        verify_profile_token: bool,
    ) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
            verify_profile_token,
        }
    }

    /// Creates an account. Does not sign the user in.
    pub async fn signup(&self, request: SignupRequest) -> Result<(), AppError> {
        request
            .validate()
            .map_err(|_| AppError::Validation("All fields are required".into()))?;

        let email = normalize_email(&request.email);
        let existing = self
            .users
            .find_by_email(&email)
            .await
            .map_err(AppError::store("Server error"))?;
        if existing.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }

        let password_hash = hash_password(&request.password, self.bcrypt_cost).await?;
        let user = User::new(request.full_name.trim().to_string(), email, password_hash);

        // The unique index closes the window between the lookup above and this insert.
        match self.users.insert_user(&user).await {
            Ok(()) => {
                log::info!("New user created: {}", user.email);
                Ok(())
            }
            Err(StoreError::Duplicate(_)) => Err(AppError::Conflict(EMAIL_TAKEN.into())),
            Err(e) => Err(AppError::store("Server error")(e)),
        }
    }

    pub async fn signin(&self, request: SigninRequest) -> Result<SigninResponse, AppError> {
        request
            .validate()
            .map_err(|_| AppError::Validation("Email and password are required".into()))?;

        let email = normalize_email(&request.email);
        let user = match self
            .users
            .find_by_email(&email)
            .await
            .map_err(AppError::store("Server error"))?
        {
            Some(user) => user,
            None => {
                log::warn!("Sign-in rejected for unknown email");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
            }
        };

        if !verify_password(&request.password, &user.password_hash).await? {
            log::warn!("Sign-in rejected for user {}: wrong password", user.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        self.users
            .record_login(user.id, Utc::now())
            .await
            .map_err(AppError::store("Server error"))?;

        let token = self.tokens.issue(user.id, &user.email)?;
        log::info!("User logged in: {}", user.email);

        Ok(SigninResponse {
            token,
            user_id: user.id,
            full_name: user.full_name,
            email: user.email,
        })
    }

    /// Renames an account.
    ///
    /// Only the presence of a token is required unless the service was built
    /// with token verification enabled, in which case the token must be valid
    /// and belong to `userId`.
    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<ProfileResponse, AppError> {
        request
            .validate()
            .map_err(|_| AppError::Validation("User ID and full name are required".into()))?;
        let full_name = request.full_name.trim().to_string();

        let token = match request.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AppError::Unauthorized("Authentication token required".into())),
        };

        let not_found = || AppError::NotFound("User not found".into());
        let user_id = Uuid::parse_str(request.user_id.trim()).map_err(|_| not_found())?;

        if self.verify_profile_token {
            let claims = self.tokens.verify(token)?;
            if claims.user_id != user_id {
                log::warn!("Profile update for {} presented another user's token", user_id);
                return Err(AppError::Unauthorized("Invalid or expired token".into()));
            }
        }

        let user = self
            .users
            .update_full_name(user_id, &full_name)
            .await
            .map_err(AppError::store("Server error"))?
            .ok_or_else(not_found)?;

        log::info!("Profile updated for user {}", user.id);
        Ok(ProfileResponse {
            message: "Profile updated successfully".into(),
            full_name: user.full_name,
            email: user.email,
        })
    }
}
