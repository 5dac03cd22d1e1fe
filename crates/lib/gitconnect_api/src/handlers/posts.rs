//! Post and comment request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use gitconnect_core::posts;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    CommentListResponse, CommentResponse, CreateCommentRequest, CreatePostRequest,
    DislikeResponse, LikeResponse, PostListResponse, PostResponse, SinglePostResponse,
    UpdatePostRequest,
};

/// `POST /api/posts` — create a new post for the authenticated user.
pub async fn create_post_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<PostResponse>)> {
    let post = posts::create_post(&state.pool, user.id(), &body.content).await?;
    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            message: "Post created".into(),
            post: post.into(),
        }),
    ))
}

/// `GET /api/posts` — fetch all posts with author details.
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> AppResult<Json<PostListResponse>> {
    let rows = posts::list_posts(&state.pool).await?;
    Ok(Json(PostListResponse {
        posts: rows.into_iter().map(Into::into).collect(),
    }))
}

/// `GET /api/posts/{id}` — fetch a single post.
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<SinglePostResponse>> {
    let post = posts::get_post(&state.pool, post_id).await?;
    Ok(Json(SinglePostResponse { post: post.into() }))
}

/// `PUT /api/posts/{id}` — update a post. Only the author may update.
pub async fn update_post_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
    Json(body): Json<UpdatePostRequest>,
) -> AppResult<Json<PostResponse>> {
    let post = posts::update_post(&state.pool, post_id, user.id(), &body.content).await?;
    Ok(Json(PostResponse {
        message: "Post updated".into(),
        post: post.into(),
    }))
}

/// `DELETE /api/posts/{id}` — delete a post. Only the author may delete.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    posts::delete_post(&state.pool, post_id, user.id()).await?;
    Ok(Json(serde_json::json!({"message": "Post deleted"})))
}

/// `POST /api/posts/{id}/like` — increment a post's like counter.
pub async fn like_post_handler(
    State(state): State<AppState>,
    axum::Extension(_user): axum::Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<LikeResponse>> {
    let likes = posts::like_post(&state.pool, post_id).await?;
    Ok(Json(LikeResponse {
        message: "Post liked".into(),
        likes,
    }))
}

/// `POST /api/posts/{id}/dislike` — increment a post's dislike counter.
pub async fn dislike_post_handler(
    State(state): State<AppState>,
    axum::Extension(_user): axum::Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<DislikeResponse>> {
    let dislikes = posts::dislike_post(&state.pool, post_id).await?;
    Ok(Json(DislikeResponse {
        message: "Post disliked".into(),
        dislikes,
    }))
}

/// `POST /api/posts/{id}/comments` — comment on a post.
pub async fn add_comment_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
    Json(body): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    let comment = posts::add_comment(&state.pool, post_id, user.id(), &body.content).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            message: "Comment added".into(),
            comment: comment.into(),
        }),
    ))
}

/// `GET /api/posts/{id}/comments` — fetch all comments for a post.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<CommentListResponse>> {
    let rows = posts::list_comments(&state.pool, post_id).await?;
    Ok(Json(CommentListResponse {
        comments: rows.into_iter().map(Into::into).collect(),
    }))
}
