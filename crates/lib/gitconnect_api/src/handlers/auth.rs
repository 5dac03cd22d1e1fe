//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::auth;

/// `POST /api/auth/register` — create a new user account.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let resp = auth::register(
        &state.pool,
        &body.username,
        &body.email,
        &body.password,
        state.config.bcrypt_cost,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `POST /api/auth/login` — authenticate with email (or username) + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        &state.pool,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}
