//! # gitconnect_api
//!
//! HTTP API library for GitConnect.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{delete, get, post, put};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, posts, profiles};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `gitconnect_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    gitconnect_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/posts", get(posts::list_posts_handler))
        .route("/api/posts/{id}", get(posts::get_post_handler))
        .route("/api/posts/{id}/comments", get(posts::list_comments_handler))
        .route("/api/profiles", get(profiles::list_profiles_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route("/api/posts", post(posts::create_post_handler))
        .route("/api/posts/{id}", put(posts::update_post_handler))
        .route("/api/posts/{id}", delete(posts::delete_post_handler))
        .route("/api/posts/{id}/like", post(posts::like_post_handler))
        .route("/api/posts/{id}/dislike", post(posts::dislike_post_handler))
        .route("/api/posts/{id}/comments", post(posts::add_comment_handler))
        .route("/api/profiles", post(profiles::create_profile_handler))
        .route("/api/profiles/{id}", get(profiles::get_profile_handler))
        .route("/api/profiles/{id}", put(profiles::update_profile_handler))
        .route(
            "/api/profiles/{id}",
            delete(profiles::delete_profile_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
