//! JWT token generation and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Token lifetime: 24 hours.
const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Generate a signed JWT token (HS256, 24 h expiry) for the given user.
pub fn generate_token(user_id: i64, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        exp: (now + Duration::hours(TOKEN_EXPIRY_HOURS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify a JWT token, returning the claims on success.
///
/// Rejects malformed tokens, bad signatures, and expired tokens alike;
/// callers cannot (and must not) distinguish the three. No database lookup
/// happens here — validity is self-contained in the token.
pub fn verify_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // No leeway: a token at or past its expiry is never accepted.
    validation.leeway = 0;
    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn verify_after_generate_returns_original_subject() {
        let token = generate_token(42, SECRET).unwrap();
        let claims = verify_token(&token, SECRET).expect("token should verify");
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: 42,
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(26)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(verify_token(&token, SECRET).is_none());
    }

    #[test]
    fn token_just_past_expiry_is_rejected() {
        // Seconds-old expiry must fail too: no leeway window.
        let now = Utc::now();
        let claims = TokenClaims {
            sub: 42,
            exp: (now - Duration::seconds(30)).timestamp(),
            iat: (now - Duration::hours(24)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(verify_token(&token, SECRET).is_none());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = generate_token(42, b"other-secret").unwrap();
        assert!(verify_token(&token, SECRET).is_none());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = generate_token(42, SECRET).unwrap();
        let (payload, signature) = token.rsplit_once('.').unwrap();
        // Flip the first character of the signature segment.
        let flipped = if signature.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{payload}.{flipped}{}", &signature[1..]);
        assert!(verify_token(&tampered, SECRET).is_none());
    }

    #[test]
    fn structural_garbage_is_rejected() {
        assert!(verify_token("garbage", SECRET).is_none());
        assert!(verify_token("a.b.c", SECRET).is_none());
        assert!(verify_token("", SECRET).is_none());
    }
}
