use helpdesk_core::session::DEFAULT_SESSION_TTL_HOURS;

use crate::auth::identity::IdentityConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the identity secret has a default suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL URL. When unset the server runs on the in-memory store.
    pub database_url: Option<String>,
    /// Admin session lifetime in hours (default: `6`).
    pub session_ttl_hours: i64,
    /// Expired-session sweep interval in seconds. `0` disables the sweep;
    /// expiry is still enforced on every validation.
    pub session_sweep_interval_secs: u64,
    /// Admin account provisioned at startup if it does not exist yet.
    pub bootstrap_admin: Option<BootstrapAdmin>,
    /// Identity-provider token verification.
    pub identity: IdentityConfig,
}

/// Credentials for the startup-provisioned admin.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `3000`                  |
    /// | `CORS_ORIGINS`                | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `DATABASE_URL`                | unset (in-memory store) |
    /// | `SESSION_TTL_HOURS`           | `6`                     |
    /// | `SESSION_SWEEP_INTERVAL_SECS` | `0` (disabled)          |
    /// | `BOOTSTRAP_ADMIN_EMAIL`       | unset                   |
    /// | `BOOTSTRAP_ADMIN_PASSWORD`    | unset                   |
    ///
    /// See [`IdentityConfig::from_env`] for the identity variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty());

        let session_ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");
        assert!(session_ttl_hours > 0, "SESSION_TTL_HOURS must be positive");

        let session_sweep_interval_secs: u64 = std::env::var("SESSION_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("SESSION_SWEEP_INTERVAL_SECS must be a valid u64");

        let bootstrap_admin = match (
            std::env::var("BOOTSTRAP_ADMIN_EMAIL").ok(),
            std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(BootstrapAdmin { email, password })
            }
            _ => None,
        };

        let identity = IdentityConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            session_ttl_hours,
            session_sweep_interval_secs,
            bootstrap_admin,
            identity,
        }
    }
}
