//! Authentication domain models.
//!
//! These are internal domain models, distinct from the API request/response
//! shapes in `gitconnect_api` (which decide what is exposed to clients).

use serde::{Deserialize, Serialize};

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
