//! HTTP-level integration tests for the employee ticket portal.

mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{
    body_json, delete_auth, employee_token, get, get_auth, post_json, post_json_auth,
    ticket_body, TestApp,
};
use helpdesk_api::auth::identity::{sign_identity_token, IdentityClaims};
use helpdesk_core::access::EMPLOYEE_SIGN_IN_NOTICE;
use helpdesk_core::identity::{IdentityProvider, IdentityState};

/// A provider that never settles.
struct PendingIdentity;

#[async_trait::async_trait]
impl IdentityProvider for PendingIdentity {
    async fn resolve(&self, _credential: Option<&str>) -> IdentityState {
        IdentityState::Loading
    }
}

const ASHA: &str = "asha@corp.example";
const RAVI: &str = "ravi@corp.example";

async fn submit(t: &TestApp, token: &str, email: &str, title: &str) -> serde_json::Value {
    let response = post_json_auth(
        t.app(),
        "/api/v1/tickets",
        ticket_body(email, title, "technical"),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Employee gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signed_out_employee_is_redirected() {
    let t = TestApp::new().await;
    let response = post_json(t.app(), "/api/v1/tickets", ticket_body(ASHA, "VPN", "it")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], EMPLOYEE_SIGN_IN_NOTICE);
}

#[tokio::test]
async fn expired_identity_token_is_signed_out() {
    let t = TestApp::new().await;
    let now = chrono::Utc::now().timestamp();
    let claims = IdentityClaims {
        sub: "user_asha".into(),
        name: None,
        email: ASHA.into(),
        exp: now - 600,
        iat: now - 4200,
        iss: None,
    };
    let token = sign_identity_token(&claims, &common::test_config().identity).unwrap();

    let response = get_auth(t.app(), "/api/v1/tickets/mine", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unsettled_identity_provider_is_unavailable() {
    let t = TestApp::with_identity(std::sync::Arc::new(PendingIdentity)).await;
    let token = employee_token(ASHA, "Asha Rao");

    let response = get_auth(t.app(), "/api/v1/tickets/mine", &token).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "TRANSIENT_FAILURE");
}

#[tokio::test]
async fn admin_session_token_does_not_pass_employee_gate() {
    let t = TestApp::new().await;
    let admin = t.admin_token().await;

    let response = get_auth(t.app(), "/api/v1/tickets/mine", &admin).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_forces_open_status_and_store_timestamp() {
    let t = TestApp::new().await;
    let token = employee_token(ASHA, "Asha Rao");

    let mut body = ticket_body(ASHA, "Printer jam on 4th floor", "facilities");
    body["status"] = "resolved".into();
    body["created_at"] = "1999-01-01T00:00:00Z".into();

    let response = post_json_auth(t.app(), "/api/v1/tickets", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let ticket = &body_json(response).await["data"];
    assert!(ticket["id"].is_number());
    assert_eq!(ticket["status"], "open");
    assert_eq!(ticket["created_at"], "2025-03-03T09:00:00Z");
    assert_eq!(ticket["title"], "Printer jam on 4th floor");
    assert_eq!(ticket["images"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn submit_without_images_is_accepted() {
    let t = TestApp::new().await;
    let token = employee_token(ASHA, "Asha Rao");

    let mut body = ticket_body(ASHA, "Payslip missing", "hr");
    body.as_object_mut().unwrap().remove("images");

    let response = post_json_auth(t.app(), "/api/v1/tickets", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["images"], serde_json::json!([]));
}

#[tokio::test]
async fn submit_with_too_many_images_is_rejected() {
    let t = TestApp::new().await;
    let token = employee_token(ASHA, "Asha Rao");

    let mut body = ticket_body(ASHA, "Screenshots", "technical");
    body["images"] = (0..6)
        .map(|i| format!("https://files.corp.example/{i}.png"))
        .collect::<Vec<_>>()
        .into();

    let response = post_json_auth(t.app(), "/api/v1/tickets", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn submit_with_blank_title_is_rejected() {
    let t = TestApp::new().await;
    let token = employee_token(ASHA, "Asha Rao");

    let body = ticket_body(ASHA, "   ", "technical");
    let response = post_json_auth(t.app(), "/api/v1/tickets", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// My tickets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn my_tickets_are_scoped_and_newest_first() {
    let t = TestApp::new().await;
    let asha = employee_token(ASHA, "Asha Rao");
    let ravi = employee_token(RAVI, "Ravi Iyer");

    submit(&t, &asha, ASHA, "first").await;
    t.clock.advance(Duration::minutes(5));
    submit(&t, &ravi, RAVI, "not mine").await;
    t.clock.advance(Duration::minutes(5));
    submit(&t, &asha, ASHA, "second").await;

    let response = get_auth(t.app(), "/api/v1/tickets/mine", &asha).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["second", "first"]);
}

#[tokio::test]
async fn my_tickets_match_email_exactly() {
    let t = TestApp::new().await;
    let asha = employee_token(ASHA, "Asha Rao");
    submit(&t, &asha, "Asha@corp.example", "differently cased").await;

    let json = body_json(get_auth(t.app(), "/api/v1/tickets/mine", &asha).await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn my_tickets_empty_for_new_employee() {
    let t = TestApp::new().await;
    let token = employee_token("new@corp.example", "New Hire");

    let json = body_json(get_auth(t.app(), "/api/v1/tickets/mine", &token).await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn my_summary_counts_statuses() {
    let t = TestApp::new().await;
    let asha = employee_token(ASHA, "Asha Rao");
    let admin = t.admin_token().await;

    let first = submit(&t, &asha, ASHA, "one").await;
    submit(&t, &asha, ASHA, "two").await;
    submit(&t, &employee_token(RAVI, "Ravi Iyer"), RAVI, "other").await;

    let response = common::patch_json_auth(
        t.app(),
        "/api/v1/admin/tickets/status",
        serde_json::json!({ "id": first["id"], "status": "resolved" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get_auth(t.app(), "/api/v1/tickets/mine/summary", &asha).await).await;
    assert_eq!(
        json["data"],
        serde_json::json!({ "total": 2, "open": 1, "in_progress": 0, "resolved": 1 })
    );
}

// ---------------------------------------------------------------------------
// Withdraw
// ---------------------------------------------------------------------------

#[tokio::test]
async fn employee_can_delete_own_ticket_only() {
    let t = TestApp::new().await;
    let asha = employee_token(ASHA, "Asha Rao");
    let ravi = employee_token(RAVI, "Ravi Iyer");

    let ticket = submit(&t, &asha, ASHA, "mine").await;
    let uri = format!("/api/v1/tickets/{}", ticket["id"]);

    let response = delete_auth(t.app(), &uri, &ravi).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(t.app(), &uri, &asha).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let json = body_json(get_auth(t.app(), "/api/v1/tickets/mine", &asha).await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn employee_delete_of_missing_ticket_is_not_found() {
    let t = TestApp::new().await;
    let asha = employee_token(ASHA, "Asha Rao");

    let response = delete_auth(t.app(), "/api/v1/tickets/9999", &asha).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_requires_sign_in() {
    let t = TestApp::new().await;
    let response = get(t.app(), "/api/v1/tickets/mine").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
