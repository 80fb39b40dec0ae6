//! Argon2id password hashing and verification for admin credentials.
//!
//! Hashes use the Argon2id variant with a random salt from [`OsRng`] and are
//! stored as PHC strings, so parameters and salt travel with the hash.
//! Verification goes through [`PasswordVerifier`], which compares in
//! constant time.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::CoreError;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch. A hash that cannot be parsed is an
/// internal error, not a bad credential.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| CoreError::Internal(format!("Stored password hash is malformed: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoreError::Internal(format!(
            "Password verification error: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified, "wrong password should verify as false");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let hash = hash_password("Secret").expect("hashing should succeed");
        assert!(!verify_password("secret", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let result = verify_password("anything", "plain-text-password");
        assert!(matches!(result, Err(CoreError::Internal(_))));
    }
}
