//! API request and response shapes.
//!
//! Field names follow the wire format of the public API (snake_case JSON).
//! Password hashes never appear in any response type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gitconnect_core::posts::{Comment, CommentWithAuthor, Post, PostWithAuthor};
use gitconnect_core::profiles::Profile;

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub email: String,
    pub password: String,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Minimal user identity returned on login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
    pub profile: ProfileSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: LoginUser,
}

// ---------------------------------------------------------------------------
// Posts & comments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostInfo {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostInfo {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            author: None,
            content: p.content,
            likes: p.likes,
            dislikes: p.dislikes,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<PostWithAuthor> for PostInfo {
    fn from(p: PostWithAuthor) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            author: Some(p.author),
            content: p.content,
            likes: p.likes,
            dislikes: p.dislikes,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub message: String,
    pub post: PostInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SinglePostResponse {
    pub post: PostInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub message: String,
    pub likes: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DislikeResponse {
    pub message: String,
    pub dislikes: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentInfo {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentInfo {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            user_id: c.user_id,
            author: None,
            content: c.content,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentInfo {
    fn from(c: CommentWithAuthor) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            user_id: c.user_id,
            author: Some(c.author),
            content: c.content,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub message: String,
    pub comment: CommentInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentInfo>,
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub bio: String,
    pub github: String,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileInfo {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            full_name: p.full_name,
            bio: p.bio,
            github: p.github,
            profile_picture: p.profile_picture,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub profile: ProfileInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleProfileResponse {
    pub profile: ProfileInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<ProfileInfo>,
}
