//! Handlers for the program catalog endpoints.
//!
//! Public listing/detail endpoints feed the marketing site; create,
//! update, and delete serve the back office.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use sattva_core::error::CoreError;
use sattva_core::pagination::{clamp_limit, clamp_page, offset_for};
use sattva_core::program;
use sattva_core::types::DbId;
use sattva_db::models::program::{CreateProgram, ProgramListParams};
use sattva_db::repositories::ProgramRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, PaginatedResponse, Pagination};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /programs
// ---------------------------------------------------------------------------

/// List active programs with optional filters, featured-first, paginated.
pub async fn list_programs(
    State(state): State<AppState>,
    Query(params): Query<ProgramListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref category) = params.category {
        program::validate_category(category)?;
    }
    if let Some(ref subcategory) = params.subcategory {
        program::validate_subcategory(subcategory)?;
    }

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, 12, 100);
    let offset = offset_for(page, limit);

    let programs = ProgramRepo::list_filtered(
        &state.pool,
        params.category.as_deref(),
        params.subcategory.as_deref(),
        params.featured,
        params.search.as_deref(),
        limit,
        offset,
    )
    .await?;

    let total = ProgramRepo::count_filtered(
        &state.pool,
        params.category.as_deref(),
        params.subcategory.as_deref(),
        params.featured,
        params.search.as_deref(),
    )
    .await?;

    Ok(Json(PaginatedResponse {
        data: programs,
        pagination: Pagination::new(page, limit, total),
    }))
}

// ---------------------------------------------------------------------------
// GET /programs/:id
// ---------------------------------------------------------------------------

/// Get a single program by ID (active or not).
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = ProgramRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Program",
            id,
        }))?;

    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// POST /programs
// ---------------------------------------------------------------------------

/// Create a new catalog program.
pub async fn create_program(
    State(state): State<AppState>,
    Json(input): Json<CreateProgram>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let created = ProgramRepo::create(&state.pool, &input).await?;

    tracing::info!(program_id = created.id, name = %created.name, "Program created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /programs/:id
// ---------------------------------------------------------------------------

/// Fully replace a program's fields.
pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProgram>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let updated = ProgramRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Program",
            id,
        }))?;

    tracing::info!(program_id = id, "Program updated");

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /programs/:id
// ---------------------------------------------------------------------------

/// Delete a program from the catalog.
pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProgramRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Program",
            id,
        }));
    }

    tracing::info!(program_id = id, "Program deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /programs/featured/list
// ---------------------------------------------------------------------------

/// The newest featured programs for the home page.
pub async fn featured_programs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let programs = ProgramRepo::list_featured(&state.pool).await?;
    Ok(Json(DataResponse { data: programs }))
}

// ---------------------------------------------------------------------------
// GET /programs/category/:category
// ---------------------------------------------------------------------------

/// Pagination-only query parameters for the category listing.
#[derive(Debug, Deserialize)]
pub struct CategoryPageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// List active programs in one category, paginated.
pub async fn programs_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<CategoryPageParams>,
) -> AppResult<impl IntoResponse> {
    program::validate_category(&category)?;

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, 12, 100);
    let offset = offset_for(page, limit);

    let programs = ProgramRepo::list_filtered(
        &state.pool,
        Some(&category),
        None,
        None,
        None,
        limit,
        offset,
    )
    .await?;

    let total =
        ProgramRepo::count_filtered(&state.pool, Some(&category), None, None, None).await?;

    Ok(Json(PaginatedResponse {
        data: programs,
        pagination: Pagination::new(page, limit, total),
    }))
}

// ---------------------------------------------------------------------------
// Payload validation
// ---------------------------------------------------------------------------

/// Validate every field of a create/replace payload before it hits the
/// database.
fn validate_payload(input: &CreateProgram) -> Result<(), CoreError> {
    program::validate_name(&input.name)?;
    program::validate_category(&input.category)?;
    if let Some(ref subcategory) = input.subcategory {
        program::validate_subcategory(subcategory)?;
    }
    program::validate_description(&input.description)?;
    if let Some(ref short) = input.short_description {
        program::validate_short_description(short)?;
    }
    program::validate_price(input.price_inr)?;
    if let Some(original) = input.original_price_inr {
        program::validate_price(original)?;
    }

    program::validate_list_entries("Benefit", &string_entries(&input.benefits_json))?;
    program::validate_list_entries("Highlight", &string_entries(&input.highlights_json))?;
    program::validate_list_entries("Requirement", &string_entries(&input.requirements_json))?;

    for rating in testimonial_ratings(&input.testimonials_json) {
        program::validate_rating(rating)?;
    }

    Ok(())
}

/// Pull the string entries out of a JSONB list column payload. Non-array
/// values and non-string entries are ignored; the column stores whatever
/// was sent.
fn string_entries(value: &Option<serde_json::Value>) -> Vec<String> {
    value
        .as_ref()
        .and_then(|v| v.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Pull the `rating` fields out of a testimonials payload.
fn testimonial_ratings(value: &Option<serde_json::Value>) -> Vec<i32> {
    value
        .as_ref()
        .and_then(|v| v.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.get("rating").and_then(|r| r.as_i64()))
                .map(|r| r as i32)
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_payload() -> CreateProgram {
        CreateProgram {
            name: "Happiness Program".into(),
            category: "meditation".into(),
            subcategory: None,
            description: "Breathing techniques and guided meditation.".into(),
            short_description: None,
            duration: "3 days".into(),
            price_inr: 2500,
            original_price_inr: None,
            currency: None,
            image: "/images/happiness.jpg".into(),
            images_json: None,
            benefits_json: None,
            highlights_json: None,
            schedule_json: None,
            locations_json: None,
            instructor_json: None,
            max_participants: None,
            current_participants: None,
            is_online: None,
            is_active: None,
            featured: None,
            tags_json: None,
            requirements_json: None,
            testimonials_json: None,
        }
    }

    #[test]
    fn minimal_payload_validates() {
        assert!(validate_payload(&minimal_payload()).is_ok());
    }

    #[test]
    fn bad_category_is_rejected() {
        let mut payload = minimal_payload();
        payload.category = "astral".into();
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn overlong_benefit_is_rejected() {
        let mut payload = minimal_payload();
        payload.benefits_json = Some(serde_json::json!(["x".repeat(201)]));
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn out_of_range_testimonial_rating_is_rejected() {
        let mut payload = minimal_payload();
        payload.testimonials_json = Some(serde_json::json!([
            { "name": "Ravi", "content": "Life-changing", "rating": 6 }
        ]));
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn ratings_within_range_validate() {
        let mut payload = minimal_payload();
        payload.testimonials_json = Some(serde_json::json!([
            { "name": "Ravi", "content": "Life-changing", "rating": 5 },
            { "name": "Meera", "content": "Calming", "rating": 4 }
        ]));
        assert!(validate_payload(&payload).is_ok());
    }
}
