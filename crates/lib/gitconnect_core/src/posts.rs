//! Post and comment persistence.
//!
//! Destructive operations (update, delete) are owner-gated: the caller's
//! user ID must match the post's `user_id`. Like/dislike counters use an
//! atomic in-database increment so concurrent votes are never lost.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;

/// Post/comment errors.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error("You can only modify your own posts")]
    Forbidden,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Post row as written (no author join).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post row joined with the author's username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub user_id: i64,
    pub author: String,
    pub content: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment row as written (no author join).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment row joined with the author's username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ownership check shared by the destructive operations.
fn ensure_owner(owner_id: i64, caller_id: i64) -> Result<(), PostError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(PostError::Forbidden)
    }
}

fn validate_content(content: &str) -> Result<(), PostError> {
    if content.trim().is_empty() {
        return Err(PostError::Validation("Content is required".into()));
    }
    Ok(())
}

/// Create a new post owned by `user_id`.
pub async fn create_post(pool: &PgPool, user_id: i64, content: &str) -> Result<Post, PostError> {
    validate_content(content)?;
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, content)
        VALUES ($1, $2)
        RETURNING id, user_id, content, likes, dislikes, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(content)
    .fetch_one(pool)
    .await?;
    Ok(post)
}

/// List all posts with author usernames, newest first.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<PostWithAuthor>, PostError> {
    let rows = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.user_id, u.username AS author, p.content,
               p.likes, p.dislikes, p.created_at, p.updated_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        ORDER BY p.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Get a single post by ID with its author username.
pub async fn get_post(pool: &PgPool, post_id: i64) -> Result<PostWithAuthor, PostError> {
    sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.user_id, u.username AS author, p.content,
               p.likes, p.dislikes, p.created_at, p.updated_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PostError::NotFound)
}

/// Update a post's content. Only the owner may update.
pub async fn update_post(
    pool: &PgPool,
    post_id: i64,
    caller_id: i64,
    content: &str,
) -> Result<Post, PostError> {
    validate_content(content)?;
    let owner_id = fetch_owner(pool, post_id).await?;
    ensure_owner(owner_id, caller_id)?;

    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET content = $2, updated_at = now()
        WHERE id = $1
        RETURNING id, user_id, content, likes, dislikes, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(content)
    .fetch_one(pool)
    .await?;
    Ok(post)
}

/// Delete a post. Only the owner may delete.
pub async fn delete_post(pool: &PgPool, post_id: i64, caller_id: i64) -> Result<(), PostError> {
    let owner_id = fetch_owner(pool, post_id).await?;
    ensure_owner(owner_id, caller_id)?;

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Increment a post's like counter atomically, returning the new count.
pub async fn like_post(pool: &PgPool, post_id: i64) -> Result<i32, PostError> {
    sqlx::query_scalar::<_, i32>(
        "UPDATE posts SET likes = likes + 1, updated_at = now() WHERE id = $1 RETURNING likes",
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PostError::NotFound)
}

/// Increment a post's dislike counter atomically, returning the new count.
pub async fn dislike_post(pool: &PgPool, post_id: i64) -> Result<i32, PostError> {
    sqlx::query_scalar::<_, i32>(
        "UPDATE posts SET dislikes = dislikes + 1, updated_at = now() WHERE id = $1 \
         RETURNING dislikes",
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PostError::NotFound)
}

/// Add a comment to a post.
pub async fn add_comment(
    pool: &PgPool,
    post_id: i64,
    user_id: i64,
    content: &str,
) -> Result<Comment, PostError> {
    validate_content(content)?;

    let post_exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(pool)
            .await?;
    if !post_exists {
        return Err(PostError::NotFound);
    }

    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, post_id, user_id, content, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(content)
    .fetch_one(pool)
    .await?;
    Ok(comment)
}

/// List all comments on a post with author usernames, oldest first.
pub async fn list_comments(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<CommentWithAuthor>, PostError> {
    let rows = sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.id, c.post_id, c.user_id, u.username AS author, c.content,
               c.created_at, c.updated_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.post_id = $1
        ORDER BY c.created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch the owner of a post, or `NotFound`.
async fn fetch_owner(pool: &PgPool, post_id: i64) -> Result<i64, PostError> {
    sqlx::query_scalar::<_, i64>("SELECT user_id FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_optional(pool)
        .await?
        .ok_or(PostError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_mutate() {
        assert!(ensure_owner(7, 7).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        assert!(matches!(ensure_owner(7, 8), Err(PostError::Forbidden)));
    }

    #[test]
    fn blank_content_is_rejected() {
        assert!(matches!(
            validate_content("   "),
            Err(PostError::Validation(_))
        ));
        assert!(validate_content("hello").is_ok());
    }
}
