use crate::{
    auth::{SigninRequest, SignupRequest, UpdateProfileRequest},
    error::AppError,
    state::AppState,
};
use actix_web::{post, put, web, HttpResponse, Responder};
use serde_json::json;

/// Create an account
///
/// ## Request Body:
/// `fullName`, `email`, `password`, all required.
///
/// ## Responses:
/// - `201 Created`: `{message}`. No token is issued; the client signs in next.
/// - `400 Bad Request`: A field is missing or the email is already registered.
/// - `500 Internal Server Error`: Store failure.
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    state.auth.signup(signup_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({ "message": "Account created successfully" })))
}

/// Sign in
///
/// ## Responses:
/// - `200 OK`: `{token, userId, fullName, email}`.
/// - `400 Bad Request`: Email or password missing.
/// - `401 Unauthorized`: Unknown email or wrong password (same message for both).
/// - `500 Internal Server Error`: Store failure.
#[post("/signin")]
pub async fn signin(
    state: web::Data<AppState>,
    signin_data: web::Json<SigninRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.auth.signin(signin_data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Update the account's full name
///
/// ## Responses:
/// - `200 OK`: `{message, fullName, email}`.
/// - `400 Bad Request`: `userId` or `fullName` missing.
/// - `401 Unauthorized`: No token supplied.
/// - `404 Not Found`: `userId` does not match an account.
#[put("/update-profile")]
pub async fn update_profile(
    state: web::Data<AppState>,
    profile_data: web::Json<UpdateProfileRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.auth.update_profile(profile_data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
