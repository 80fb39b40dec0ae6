//! JWT verification for identity-provider session tokens.
//!
//! The provider signs an HS256 JWT for each signed-in employee; the client
//! forwards it as a Bearer token. A token that fails verification, or no
//! token at all, is treated as signed out.

use async_trait::async_trait;
use helpdesk_core::identity::{EmployeeIdentity, IdentityProvider, IdentityState};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an identity-provider token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaims {
    /// Subject -- the provider's user id.
    pub sub: String,
    /// Display name, if the provider shares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary email address.
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Configuration for verifying identity-provider tokens.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// HMAC-SHA256 secret shared with the provider.
    pub secret: String,
    /// Expected `iss` claim, if the provider sets one.
    pub issuer: Option<String>,
}

impl IdentityConfig {
    /// Load from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `IDENTITY_JWT_SECRET` | **yes**  | --      |
    /// | `IDENTITY_JWT_ISSUER` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `IDENTITY_JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("IDENTITY_JWT_SECRET")
            .expect("IDENTITY_JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "IDENTITY_JWT_SECRET must not be empty");

        let issuer = std::env::var("IDENTITY_JWT_ISSUER")
            .ok()
            .filter(|s| !s.is_empty());

        Self { secret, issuer }
    }
}

/// Verify a provider token and return its claims.
///
/// Checks the signature, expiry, and (when configured) the issuer.
pub fn validate_identity_token(
    token: &str,
    config: &IdentityConfig,
) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }
    let token_data = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// Sign claims the way the provider does. Used by local tooling and tests.
pub fn sign_identity_token(
    claims: &IdentityClaims,
    config: &IdentityConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// [`IdentityProvider`] backed by provider-signed JWTs.
pub struct JwtIdentityProvider {
    config: IdentityConfig,
}

impl JwtIdentityProvider {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn resolve(&self, credential: Option<&str>) -> IdentityState {
        let Some(token) = credential else {
            return IdentityState::SignedOut;
        };
        match validate_identity_token(token, &self.config) {
            Ok(claims) => IdentityState::SignedIn(EmployeeIdentity {
                id: claims.sub,
                display_name: claims.name.unwrap_or_else(|| claims.email.clone()),
                primary_email: claims.email,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Identity token rejected");
                IdentityState::SignedOut
            }
        }
    }
}
