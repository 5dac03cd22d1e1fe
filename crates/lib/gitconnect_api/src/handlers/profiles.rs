//! Profile request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use gitconnect_core::profiles::{self, ProfileUpdate};

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    CreateProfileRequest, ProfileListResponse, ProfileResponse, SingleProfileResponse,
    UpdateProfileRequest,
};

/// `POST /api/profiles` — create a profile for the authenticated user.
pub async fn create_profile_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<ProfileResponse>)> {
    let profile = profiles::create_profile(
        &state.pool,
        user.id(),
        &body.full_name,
        &body.bio,
        &body.github,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            message: "Profile created successfully".into(),
            profile: profile.into(),
        }),
    ))
}

/// `GET /api/profiles` — fetch all profiles.
pub async fn list_profiles_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ProfileListResponse>> {
    let rows = profiles::list_profiles(&state.pool).await?;
    Ok(Json(ProfileListResponse {
        profiles: rows.into_iter().map(Into::into).collect(),
    }))
}

/// `GET /api/profiles/{id}` — fetch a single profile.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(profile_id): Path<i64>,
) -> AppResult<Json<SingleProfileResponse>> {
    let profile = profiles::get_profile(&state.pool, profile_id).await?;
    Ok(Json(SingleProfileResponse {
        profile: profile.into(),
    }))
}

/// `PUT /api/profiles/{id}` — update a profile. Only the owner may update.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(profile_id): Path<i64>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    let update = ProfileUpdate {
        full_name: body.full_name,
        bio: body.bio,
        github: body.github,
        profile_picture: body.profile_picture,
    };
    let profile = profiles::update_profile(&state.pool, profile_id, user.id(), &update).await?;
    Ok(Json(ProfileResponse {
        message: "Profile updated".into(),
        profile: profile.into(),
    }))
}

/// `DELETE /api/profiles/{id}` — delete a profile. Only the owner may delete.
pub async fn delete_profile_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(profile_id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    profiles::delete_profile(&state.pool, profile_id, user.id()).await?;
    Ok(Json(
        serde_json::json!({"message": "Profile deleted successfully"}),
    ))
}
