//! Integration tests for enquiry repository operations.
//!
//! Exercises creation normalization (trimming, email lowercasing, source
//! fallback), filtered listing, status updates, and the stats overview
//! against a real database.

use sqlx::PgPool;

use sattva_db::models::enquiry::CreateEnquiry;
use sattva_db::repositories::EnquiryRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_enquiry(email: &str, program: &str) -> CreateEnquiry {
    CreateEnquiry {
        name: "Asha Rao".to_string(),
        email: email.to_string(),
        phone: "+919876543210".to_string(),
        whatsapp: None,
        pincode: "560001".to_string(),
        program: program.to_string(),
        preferred_location: None,
        preferred_date: None,
        message: None,
        source: None,
        marketing_consent: false,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_normalizes_email_and_defaults(pool: PgPool) {
    let mut input = new_enquiry("Asha.Rao@Example.COM", "Happiness Program");
    input.name = "  Asha Rao  ".to_string();

    let created = EnquiryRepo::create(&pool, &input).await.unwrap();

    assert_eq!(created.name, "Asha Rao");
    assert_eq!(created.email, "asha.rao@example.com");
    assert_eq!(created.status, "pending");
    assert_eq!(created.source, "website");
    assert!(!created.marketing_consent);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_keeps_explicit_source(pool: PgPool) {
    let mut input = new_enquiry("walkin@example.com", "Happiness Program");
    input.source = Some("walk-in".to_string());

    let created = EnquiryRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.source, "walk-in");
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_program(pool: PgPool) {
    EnquiryRepo::create(&pool, &new_enquiry("a@example.com", "Happiness Program"))
        .await
        .unwrap();
    EnquiryRepo::create(&pool, &new_enquiry("b@example.com", "Utkarsha Yoga"))
        .await
        .unwrap();

    let hits = EnquiryRepo::list_filtered(&pool, None, Some("Utkarsha Yoga"), None, 10, 0)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].email, "b@example.com");

    let total = EnquiryRepo::count_filtered(&pool, None, Some("Utkarsha Yoga"), None)
        .await
        .unwrap();
    assert_eq!(total, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_phone_fragment(pool: PgPool) {
    EnquiryRepo::create(&pool, &new_enquiry("a@example.com", "Happiness Program"))
        .await
        .unwrap();

    let hits = EnquiryRepo::list_filtered(&pool, None, None, Some("98765"), 10, 0)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);

    let misses = EnquiryRepo::list_filtered(&pool, None, None, Some("00000"), 10, 0)
        .await
        .unwrap();
    assert!(misses.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_newest_first(pool: PgPool) {
    let first = EnquiryRepo::create(&pool, &new_enquiry("a@example.com", "Happiness Program"))
        .await
        .unwrap();
    let second = EnquiryRepo::create(&pool, &new_enquiry("b@example.com", "Happiness Program"))
        .await
        .unwrap();

    let hits = EnquiryRepo::list_filtered(&pool, None, None, None, 10, 0)
        .await
        .unwrap();
    assert_eq!(hits[0].id, second.id);
    assert_eq!(hits[1].id, first.id);
}

// ---------------------------------------------------------------------------
// Status updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_bumps_updated_at(pool: PgPool) {
    let created = EnquiryRepo::create(&pool, &new_enquiry("a@example.com", "Happiness Program"))
        .await
        .unwrap();

    let updated = EnquiryRepo::update_status(&pool, created.id, "contacted")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, "contacted");
    // The set_updated_at trigger fires on every UPDATE.
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_of_missing_row_returns_none(pool: PgPool) {
    let updated = EnquiryRepo::update_status(&pool, 9999, "contacted")
        .await
        .unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_aggregates_status_and_programs(pool: PgPool) {
    let e1 = EnquiryRepo::create(&pool, &new_enquiry("a@example.com", "Happiness Program"))
        .await
        .unwrap();
    EnquiryRepo::create(&pool, &new_enquiry("b@example.com", "Happiness Program"))
        .await
        .unwrap();
    EnquiryRepo::create(&pool, &new_enquiry("c@example.com", "Utkarsha Yoga"))
        .await
        .unwrap();
    EnquiryRepo::update_status(&pool, e1.id, "enrolled")
        .await
        .unwrap();

    let stats = EnquiryRepo::stats(&pool).await.unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.today, 3);

    let pending = stats
        .status_breakdown
        .iter()
        .find(|s| s.status == "pending")
        .unwrap();
    assert_eq!(pending.count, 2);

    assert_eq!(stats.top_programs[0].program, "Happiness Program");
    assert_eq!(stats.top_programs[0].count, 2);
}
