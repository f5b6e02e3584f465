//! Integration tests for the enquiry endpoints.
//!
//! Exercises the full stack through the router: submission validation,
//! listing with filters, status transitions, and the stats overview.

mod common;

use axum::http::StatusCode;
use common::{body_json, enquiry_payload, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_enquiry_returns_created_receipt(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/enquiries", enquiry_payload()).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["data"]["id"].is_i64());
    assert_eq!(json["data"]["name"], "Asha Rao");
    // Email is stored lowercased.
    assert_eq!(json["data"]["email"], "asha.rao@example.com");
    assert_eq!(json["data"]["program"], "Happiness Program");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_enquiry_lowercases_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut payload = enquiry_payload();
    payload["email"] = json!("Asha.Rao@Example.COM");

    let response = post_json(app, "/api/v1/enquiries", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "asha.rao@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_enquiry_with_bad_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = enquiry_payload();
    payload["email"] = json!("not-an-email");

    let response = post_json(app, "/api/v1/enquiries", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_enquiry_with_bad_pincode_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = enquiry_payload();
    payload["pincode"] = json!("12");

    let response = post_json(app, "/api/v1/enquiries", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_enquiry_with_unknown_program_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = enquiry_payload();
    payload["program"] = json!("Levitation 101");

    let response = post_json(app, "/api/v1/enquiries", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_enquiries_paginates(pool: PgPool) {
    for i in 0..3 {
        let mut payload = enquiry_payload();
        payload["email"] = json!(format!("lead{i}@example.com"));
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/enquiries",
            payload,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/enquiries?page=1&limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["total_items"], 3);
    assert_eq!(json["pagination"]["total_pages"], 2);
    assert_eq!(json["pagination"]["current_page"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_enquiries_filters_by_status(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/enquiries",
        enquiry_payload(),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/enquiries/{id}/status"),
        json!({ "status": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/enquiries?status=contacted",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/enquiries?status=pending",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_enquiries_with_invalid_status_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/enquiries?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_name_case_insensitively(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/enquiries",
        enquiry_payload(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/enquiries?search=asha",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = get(common::build_test_app(pool), "/api/v1/enquiries?search=zzzz").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Get and status update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_enquiry_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/enquiries/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_rejects_unknown_status(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/enquiries",
        enquiry_payload(),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/enquiries/{id}/status"),
        json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_on_missing_enquiry_returns_404(pool: PgPool) {
    let response = patch_json(
        common::build_test_app(pool),
        "/api/v1/enquiries/9999/status",
        json!({ "status": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stats overview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_overview_counts_by_status_and_program(pool: PgPool) {
    for i in 0..2 {
        let mut payload = enquiry_payload();
        payload["email"] = json!(format!("lead{i}@example.com"));
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/enquiries",
            payload,
        )
        .await;
    }

    let response = get(common::build_test_app(pool), "/api/v1/enquiries/stats/overview").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["today"], 2);

    let breakdown = json["data"]["status_breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0]["status"], "pending");
    assert_eq!(breakdown[0]["count"], 2);

    let top = json["data"]["top_programs"].as_array().unwrap();
    assert_eq!(top[0]["program"], "Happiness Program");
}
