//! Profile persistence.
//!
//! Every user owns exactly one profile; an empty one is provisioned at
//! registration. Updates and deletes are owner-gated.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;

/// Profile errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("You can only modify your own profile")]
    Forbidden,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Profile row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub bio: String,
    pub github: String,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted by a profile update; `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub profile_picture: Option<String>,
}

const PROFILE_COLUMNS: &str =
    "id, user_id, full_name, bio, github, profile_picture, created_at, updated_at";

fn ensure_owner(owner_id: i64, caller_id: i64) -> Result<(), ProfileError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(ProfileError::Forbidden)
    }
}

/// Create a profile for `user_id`.
///
/// Registration already provisions one, so this fails with a validation
/// error when a profile for the user exists.
pub async fn create_profile(
    pool: &PgPool,
    user_id: i64,
    full_name: &str,
    bio: &str,
    github: &str,
) -> Result<Profile, ProfileError> {
    if full_name.trim().is_empty() {
        return Err(ProfileError::Validation("Full name is required".into()));
    }
    sqlx::query_as::<_, Profile>(&format!(
        "INSERT INTO profiles (user_id, full_name, bio, github) \
         VALUES ($1, $2, $3, $4) RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(full_name)
    .bind(bio)
    .bind(github)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(db) = &e
            && db.is_unique_violation()
        {
            return ProfileError::Validation("Profile already exists for this user".into());
        }
        ProfileError::Db(e)
    })
}

/// List all profiles.
pub async fn list_profiles(pool: &PgPool) -> Result<Vec<Profile>, ProfileError> {
    let rows = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Get a profile by ID.
pub async fn get_profile(pool: &PgPool, profile_id: i64) -> Result<Profile, ProfileError> {
    sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
    ))
    .bind(profile_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ProfileError::NotFound)
}

/// Update a profile. Only the owner may update.
pub async fn update_profile(
    pool: &PgPool,
    profile_id: i64,
    caller_id: i64,
    update: &ProfileUpdate,
) -> Result<Profile, ProfileError> {
    if let Some(name) = &update.full_name
        && name.trim().is_empty()
    {
        return Err(ProfileError::Validation("Full name is required".into()));
    }

    let owner_id = fetch_owner(pool, profile_id).await?;
    ensure_owner(owner_id, caller_id)?;

    let profile = sqlx::query_as::<_, Profile>(&format!(
        "UPDATE profiles \
         SET full_name = COALESCE($2, full_name), \
             bio = COALESCE($3, bio), \
             github = COALESCE($4, github), \
             profile_picture = COALESCE($5, profile_picture), \
             updated_at = now() \
         WHERE id = $1 RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(profile_id)
    .bind(update.full_name.as_deref())
    .bind(update.bio.as_deref())
    .bind(update.github.as_deref())
    .bind(update.profile_picture.as_deref())
    .fetch_one(pool)
    .await?;
    Ok(profile)
}

/// Delete a profile. Only the owner may delete.
pub async fn delete_profile(
    pool: &PgPool,
    profile_id: i64,
    caller_id: i64,
) -> Result<(), ProfileError> {
    let owner_id = fetch_owner(pool, profile_id).await?;
    ensure_owner(owner_id, caller_id)?;

    sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(profile_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch the owner of a profile, or `NotFound`.
async fn fetch_owner(pool: &PgPool, profile_id: i64) -> Result<i64, ProfileError> {
    sqlx::query_scalar::<_, i64>("SELECT user_id FROM profiles WHERE id = $1")
        .bind(profile_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ProfileError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_mutate() {
        assert!(ensure_owner(3, 3).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        assert!(matches!(ensure_owner(3, 4), Err(ProfileError::Forbidden)));
    }
}
