//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;

/// User row with its password hash, for login verification only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Fetch a user by username or email, including the stored password hash.
pub async fn find_user_by_login(
    pool: &PgPool,
    username_or_email: &str,
) -> Result<Option<CredentialRow>, AuthError> {
    let row = sqlx::query_as::<_, CredentialRow>(
        "SELECT id, username, email, password_hash FROM users \
         WHERE username = $1 OR email = $1",
    )
    .bind(username_or_email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Check whether a username is already registered.
pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new user together with its empty profile, atomically.
///
/// Both rows are written inside one transaction so a failure never leaves
/// a user without a profile. Returns `(user_id, profile_id)`.
pub async fn create_user_with_profile(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<(i64, i64), AuthError> {
    let mut tx = pool.begin().await?;

    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(map_unique_violation)?;

    let profile_id =
        sqlx::query_scalar::<_, i64>("INSERT INTO profiles (user_id) VALUES ($1) RETURNING id")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok((user_id, profile_id))
}

/// Map a unique-constraint violation (concurrent duplicate registration)
/// to a validation error instead of an internal one.
fn map_unique_violation(e: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db) = &e
        && db.is_unique_violation()
    {
        return AuthError::ValidationError("Username or email already registered".into());
    }
    AuthError::DbError(e)
}
