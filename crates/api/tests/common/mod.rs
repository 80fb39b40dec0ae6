#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use helpdesk_api::auth::identity::{sign_identity_token, IdentityClaims, IdentityConfig};
use helpdesk_api::bootstrap::ensure_admin;
use helpdesk_api::config::ServerConfig;
use helpdesk_api::router::build_app_router;
use helpdesk_api::state::AppState;
use helpdesk_core::clock::{Clock, ManualClock};
use helpdesk_core::identity::IdentityProvider;
use helpdesk_core::store::MemoryStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const IDENTITY_SECRET: &str = "test-identity-secret-with-enough-entropy";
pub const ADMIN_EMAIL: &str = "admin@corp.example";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        session_ttl_hours: 6,
        session_sweep_interval_secs: 0,
        bootstrap_admin: None,
        identity: IdentityConfig {
            secret: IDENTITY_SECRET.to_string(),
            issuer: None,
        },
    }
}

/// The full app over an in-memory store and a hand-driven clock.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// One admin (`ADMIN_EMAIL` / `ADMIN_PASSWORD`) is provisioned; the
    /// clock starts at 2025-03-03 09:00 UTC.
    pub async fn new() -> Self {
        Self::build(None).await
    }

    /// Like [`TestApp::new`] with a substitute identity provider.
    pub async fn with_identity(identity: Arc<dyn IdentityProvider>) -> Self {
        Self::build(Some(identity)).await
    }

    async fn build(identity: Option<Arc<dyn IdentityProvider>>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap(),
        ));
        ensure_admin(store.as_ref(), ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("admin provisioning should succeed");

        let config = test_config();
        let clock_dyn = Arc::clone(&clock) as Arc<dyn Clock>;
        let state = match identity {
            Some(identity) => {
                AppState::with_identity(config.clone(), Arc::clone(&store), clock_dyn, identity)
            }
            None => AppState::new(config.clone(), Arc::clone(&store), clock_dyn),
        };
        let router = build_app_router(state, &config);

        Self {
            router,
            store,
            clock,
        }
    }

    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Log the provisioned admin in through the API and return the token.
    pub async fn admin_token(&self) -> String {
        let response = post_json(
            self.app(),
            "/api/v1/auth/login",
            serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        )
        .await;
        assert_eq!(response.status(), 200);
        body_json(response).await["token"]
            .as_str()
            .expect("login returns a token")
            .to_string()
    }
}

/// Sign an identity-provider token for `email`, valid for an hour.
pub fn employee_token(email: &str, name: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = IdentityClaims {
        sub: format!("user_{}", email.split('@').next().unwrap_or("x")),
        name: Some(name.to_string()),
        email: email.to_string(),
        exp: now + 3600,
        iat: now,
        iss: None,
    };
    sign_identity_token(&claims, &test_config().identity).expect("signing should succeed")
}

/// A complete, valid ticket submission.
pub fn ticket_body(email: &str, title: &str, category: &str) -> Value {
    serde_json::json!({
        "reporter_name": "Asha Rao",
        "reporter_email": email,
        "reporter_contact": "+91 98450 00000",
        "title": title,
        "category": category,
        "description": "Steps to reproduce are in the screenshot.",
        "images": ["https://files.corp.example/shot-1.png"],
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::PATCH, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Send a request with an arbitrary raw `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, value: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", value)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}
