//! Password hashing via bcrypt.

use super::AuthError;

/// Default bcrypt cost factor, used when `BCRYPT_COST` is not configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hash a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::Internal(format!("bcrypt verify: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps these tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_succeeds() {
        let hash = hash_password("secret123", TEST_COST).unwrap();
        assert_ne!(hash, "secret123");
        assert!(verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("secret123", TEST_COST).unwrap();
        assert!(!verify_password("secret124", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Each hash carries a fresh salt.
        let a = hash_password("secret123", TEST_COST).unwrap();
        let b = hash_password("secret123", TEST_COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("secret123", "not-a-bcrypt-hash").is_err());
    }
}
