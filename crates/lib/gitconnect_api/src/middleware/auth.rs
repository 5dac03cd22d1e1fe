//! Authentication middleware — Bearer token extraction and JWT verification.
//!
//! All failure modes (missing header, malformed header, bad or expired
//! token) surface as the same 401 so clients cannot probe which check
//! failed.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum::http::header::AUTHORIZATION;

use gitconnect_core::models::auth::TokenClaims;

use crate::AppState;
use crate::error::AppError;

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

impl AuthenticatedUser {
    /// The caller's user ID.
    pub fn id(&self) -> i64 {
        self.0.sub
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The header must be exactly `Bearer <token>`: two parts separated by a
/// single space. Runs of spaces, tabs, and trailing whitespace are all
/// rejected.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// JWT, and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization header missing".into()))?;

    let token = bearer_token(header)
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".into()))?;

    let claims = gitconnect_core::auth::jwt::verify_token(token, state.config.jwt_secret.as_bytes())
        .ok_or_else(|| AppError::Unauthorized("Invalid token".into()))?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_bearer_shape() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_other_schemes_and_shapes() {
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer a b"), None);
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn rejects_loose_whitespace() {
        assert_eq!(bearer_token("Bearer  abc"), None);
        assert_eq!(bearer_token("Bearer abc "), None);
        assert_eq!(bearer_token("Bearer\tabc"), None);
        assert_eq!(bearer_token(" Bearer abc"), None);
    }
}
