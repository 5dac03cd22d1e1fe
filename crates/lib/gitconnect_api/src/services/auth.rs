//! Authentication service — login/register flows delegating to
//! `gitconnect_core::auth`.

use sqlx::PgPool;
use tracing::info;

use gitconnect_core::auth::{jwt, password, queries};

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, LoginUser, ProfileSummary, RegisterResponse, UserSummary};

/// Register a new user account with its empty profile.
pub async fn register(
    pool: &PgPool,
    username: &str,
    email: &str,
    plaintext_password: &str,
    bcrypt_cost: u32,
) -> AppResult<RegisterResponse> {
    if username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".into()));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if plaintext_password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }

    if queries::username_exists(pool, username).await? {
        return Err(AppError::Validation("Username already registered".into()));
    }
    if queries::email_exists(pool, email).await? {
        return Err(AppError::Validation("Email already registered".into()));
    }

    let pw_hash = password::hash_password(plaintext_password, bcrypt_cost)?;

    // User and profile are created in one transaction.
    let (user_id, profile_id) =
        queries::create_user_with_profile(pool, username, email, &pw_hash).await?;

    info!(username, user_id, "user registered");

    Ok(RegisterResponse {
        message: "User registered successfully".into(),
        user: UserSummary {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
        },
        profile: ProfileSummary {
            id: profile_id,
            user_id,
        },
    })
}

/// Authenticate with username/email + password, issuing a signed token.
pub async fn login(
    pool: &PgPool,
    username_or_email: &str,
    plaintext_password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    let row = queries::find_user_by_login(pool, username_or_email).await?;

    // Same message whether the account is unknown or the password is wrong.
    let user = match row {
        None => return Err(AppError::Unauthorized("Invalid email or password".into())),
        Some(r) => r,
    };

    if !password::verify_password(plaintext_password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let token = jwt::generate_token(user.id, jwt_secret)?;

    info!(user_id = user.id, "login succeeded");

    Ok(LoginResponse {
        message: "Login successful".into(),
        token,
        user: LoginUser {
            id: user.id,
            username: user.username,
        },
    })
}
