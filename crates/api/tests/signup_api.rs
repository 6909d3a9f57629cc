//! Integration tests for the two-step signup flow.
//!
//! Exercises the full stack (router, handlers, workflow, Postgres)
//! with notification channels disabled, so every dispatch resolves as
//! a skipped best-effort send.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;
use std::sync::LazyLock;
use turnio_db::repositories::LeadRepo;

static PROMO_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^TURNIO10-[A-Z]{4}[0-9]{4}$").expect("valid regex"));

/// Run step 1 and return the session id.
async fn open_session(app: &axum::Router, email: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/signup/email",
        json!({ "email": email, "name": "Ana", "profession": "Dentista" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["data"]["session_id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Test: step 1 normalizes the email and opens a session
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_email_normalizes_and_opens_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/v1/signup/email",
        json!({ "email": "Test@Example.com " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "test@example.com");
    assert!(json["data"]["session_id"].is_string());

    // The default flow writes nothing until the discount choice.
    let lead = LeadRepo::find_by_email(&pool, "test@example.com").await.unwrap();
    assert!(lead.is_none());
}

// ---------------------------------------------------------------------------
// Test: malformed email is rejected, nothing persisted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_returns_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/signup/email", json!({ "email": "bad-email" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let lead = LeadRepo::find_by_email(&pool, "bad-email").await.unwrap();
    assert!(lead.is_none());
}

// ---------------------------------------------------------------------------
// Test: opting in issues a code and persists the lead
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn discount_opt_in_issues_code_and_persists_lead(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session_id = open_session(&app, "Test@Example.com ").await;

    let response = post_json(
        app,
        &format!("/api/v1/signup/{session_id}/discount"),
        json!({ "wants_discount": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let code = json["data"]["promo_code"].as_str().unwrap();
    assert!(PROMO_RE.is_match(code), "unexpected code: {code}");

    let lead = LeadRepo::find_by_email(&pool, "test@example.com")
        .await
        .unwrap()
        .expect("lead must be persisted");
    assert!(lead.wants_discount);
    assert_eq!(lead.promo_code.as_deref(), Some(code));
    assert_eq!(lead.name.as_deref(), Some("Ana"));
    assert_eq!(lead.profession.as_deref(), Some("Dentista"));
}

// ---------------------------------------------------------------------------
// Test: declining never persists a promo code
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn discount_decline_persists_lead_without_code(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session_id = open_session(&app, "ana@clinic.co").await;

    let response = post_json(
        app,
        &format!("/api/v1/signup/{session_id}/discount"),
        json!({ "wants_discount": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["promo_code"].is_null());

    let lead = LeadRepo::find_by_email(&pool, "ana@clinic.co")
        .await
        .unwrap()
        .expect("lead must be persisted");
    assert!(!lead.wants_discount);
    assert!(lead.promo_code.is_none());
}

// ---------------------------------------------------------------------------
// Test: a repeated signup for the same email is not a user-facing failure
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_signup_for_same_email_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // First complete flow.
    let first = open_session(&app, "ana@clinic.co").await;
    let response = post_json(
        app.clone(),
        &format!("/api/v1/signup/{first}/discount"),
        json!({ "wants_discount": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second flow with the same email must complete as well.
    let second = open_session(&app, "ana@clinic.co").await;
    let response = post_json(
        app,
        &format!("/api/v1/signup/{second}/discount"),
        json!({ "wants_discount": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let code = json["data"]["promo_code"].as_str().unwrap();

    // Still a single row, carrying the most recent code.
    let lead = LeadRepo::find_by_email(&pool, "ana@clinic.co")
        .await
        .unwrap()
        .expect("lead must exist");
    assert_eq!(lead.promo_code.as_deref(), Some(code));
}

// ---------------------------------------------------------------------------
// Test: unknown session returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_session_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/signup/00000000-0000-0000-0000-000000000000/discount",
        json!({ "wants_discount": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: a completed session rejects a second discount choice
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_session_rejects_second_choice(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session_id = open_session(&app, "ana@clinic.co").await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/signup/{session_id}/discount"),
        json!({ "wants_discount": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app,
        &format!("/api/v1/signup/{session_id}/discount"),
        json!({ "wants_discount": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
