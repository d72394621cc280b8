//! Axum route handlers for registration, login and the current-user lookup.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::AuthUser;
use crate::auth::store::NewUser;
use crate::errors::AppError;
use crate::models::user::UserProfile;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::Validation(format!(
            "Username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }

    let email = req.email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(AppError::Validation("A valid email is required".to_string())),
    }

    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    validate_registration(&request)?;

    let password_hash = state.passwords.hash_blocking(request.password.clone()).await?;
    let user = state
        .users
        .create(NewUser {
            username: request.username.trim().to_string(),
            email: normalize_email(&request.email),
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, "Registered new account");

    Ok(Json(AuthResponse {
        success: true,
        token: state.tokens.issue(&user)?,
        user: UserProfile::from(&user),
    }))
}

/// POST /api/login
///
/// Unknown email and wrong password produce the same 401.
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let account = state
        .users
        .find_by_email(&normalize_email(&request.email))
        .await?;

    // Unknown accounts still pay for one verification.
    let password_valid = state
        .passwords
        .check_blocking(
            request.password,
            account.as_ref().map(|user| user.password_hash.clone()),
        )
        .await?;

    let user = match account {
        Some(user) if password_valid => user,
        _ => return Err(AppError::InvalidCredentials),
    };

    info!(user_id = %user.id, "Login succeeded");

    Ok(Json(AuthResponse {
        success: true,
        token: state.tokens.issue(&user)?,
        user: UserProfile::from(&user),
    }))
}

/// GET /api/user
///
/// Returns the account behind the bearer token. A valid token for a deleted
/// account is treated as unauthenticated.
pub async fn handle_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(UserResponse {
        success: true,
        user: UserProfile::from(&user),
    }))
}
