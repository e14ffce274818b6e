//! Axum route handlers for signup and login.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::normalize_email;
use crate::auth::password::{
    hash_password_blocking, verify_password_blocking, DUMMY_PASSWORD_HASH,
};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::store::StoreError;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";
/// Same text for unknown email and wrong password.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub name: String,
    pub email: String,
}

/// POST /api/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    let email = normalize_email(&req.email)
        .ok_or_else(|| AppError::BadRequest("A valid email address is required".to_string()))?;
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("password cannot be empty".to_string()));
    }

    if state.store.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::BadRequest(EMAIL_TAKEN_MESSAGE.to_string()));
    }

    let password_hash = hash_password_blocking(req.password).await?;
    let user = User {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        email,
        password_hash,
        created_at: Utc::now(),
    };

    match state.store.insert_user(&user).await {
        Ok(()) => {}
        Err(StoreError::DuplicateEmail) => {
            return Err(AppError::BadRequest(EMAIL_TAKEN_MESSAGE.to_string()))
        }
        Err(e) => return Err(e.into()),
    }

    info!(user_id = %user.id, "User signed up");
    Ok(Json(SignupResponse {
        message: "User created successfully".to_string(),
        user_id: user.id.to_string(),
        name: user.name,
    }))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let invalid = || AppError::BadRequest(INVALID_CREDENTIALS_MESSAGE.to_string());

    let email = normalize_email(&req.email).ok_or_else(invalid)?;
    let Some(user) = state.store.find_user_by_email(&email).await? else {
        // Unknown emails pay the same Argon2 cost as a wrong password.
        verify_password_blocking(req.password, DUMMY_PASSWORD_HASH.to_string()).await?;
        return Err(invalid());
    };

    if !verify_password_blocking(req.password, user.password_hash.clone()).await? {
        return Err(invalid());
    }

    info!(user_id = %user.id, "User logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        name: user.name,
        email: user.email,
    }))
}
