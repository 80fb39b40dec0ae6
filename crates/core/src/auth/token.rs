//! Opaque bearer tokens for admin sessions.
//!
//! Tokens are random alphanumeric strings handed to the client once. Only
//! their SHA-256 hex digest is persisted, so a leaked `admin_sessions` table
//! cannot be replayed.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of a generated session token (alphanumeric characters).
pub const TOKEN_LENGTH: usize = 48;

/// Generate a new session token from the thread-local CSPRNG.
pub fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// SHA-256 hex digest of a session token, used as the lookup key.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_have_expected_shape() {
        let token = generate_session_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generated_tokens_differ() {
        assert_ne!(generate_session_token(), generate_session_token());
    }

    #[test]
    fn token_hash_is_stable_hex() {
        let hash = hash_session_token("abc");
        assert_eq!(hash, hash_session_token("abc"));
        assert_eq!(hash.len(), 64);
        assert_ne!(hash, hash_session_token("abd"));
    }
}
