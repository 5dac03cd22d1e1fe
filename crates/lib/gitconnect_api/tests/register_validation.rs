//! Registration input validation — rejected before any storage access.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use gitconnect_api::{AppState, config::ApiConfig};

fn test_state() -> AppState {
    let url = "postgres://localhost:5432/gitconnect_test";
    AppState {
        pool: sqlx::PgPool::connect_lazy(url).expect("lazy pool"),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            pg_connection_url: url.into(),
            jwt_secret: "test-secret".into(),
            bcrypt_cost: 4,
        },
    }
}

async fn register(body: &str) -> (StatusCode, serde_json::Value) {
    let app = gitconnect_api::router(test_state());
    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn short_password_is_a_validation_error() {
    let (status, json) =
        register(r#"{"username":"alice","email":"a@x.com","password":"short"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn blank_username_is_a_validation_error() {
    let (status, json) =
        register(r#"{"username":"  ","email":"a@x.com","password":"secret123"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn invalid_email_is_a_validation_error() {
    let (status, json) =
        register(r#"{"username":"alice","email":"not-an-email","password":"secret123"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}
