//! Handlers for the enquiry lead-capture endpoints.
//!
//! The submit endpoint is public (it backs the website form); the listing,
//! status, and stats endpoints serve the back office.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use sattva_core::enquiry;
use sattva_core::error::CoreError;
use sattva_core::pagination::{clamp_limit, clamp_page, offset_for};
use sattva_core::types::DbId;
use sattva_db::models::enquiry::{CreateEnquiry, EnquiryListParams, UpdateEnquiryStatus};
use sattva_db::repositories::EnquiryRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, PaginatedResponse, Pagination};
use crate::state::AppState;

/// Acknowledgement returned to the website form on submission.
#[derive(Debug, Serialize)]
pub struct EnquiryReceipt {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub program: String,
}

// ---------------------------------------------------------------------------
// POST /enquiries
// ---------------------------------------------------------------------------

/// Submit a new enquiry from the website form.
pub async fn submit_enquiry(
    State(state): State<AppState>,
    Json(input): Json<CreateEnquiry>,
) -> AppResult<impl IntoResponse> {
    enquiry::validate_name(input.name.trim())?;
    enquiry::validate_email(input.email.trim())?;
    enquiry::validate_phone(input.phone.trim())?;
    enquiry::validate_pincode(input.pincode.trim())?;
    enquiry::validate_program(&input.program)?;
    if let Some(ref message) = input.message {
        enquiry::validate_message(message)?;
    }
    if let Some(ref source) = input.source {
        enquiry::validate_source(source)?;
    }

    let created = EnquiryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        enquiry_id = created.id,
        program = %created.program,
        "Enquiry submitted",
    );

    let receipt = EnquiryReceipt {
        id: created.id,
        name: created.name,
        email: created.email,
        program: created.program,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
}

// ---------------------------------------------------------------------------
// GET /enquiries
// ---------------------------------------------------------------------------

/// List enquiries with optional status/program/search filters, paginated.
pub async fn list_enquiries(
    State(state): State<AppState>,
    Query(params): Query<EnquiryListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        enquiry::validate_status(status)?;
    }

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, 10, 100);
    let offset = offset_for(page, limit);

    let enquiries = EnquiryRepo::list_filtered(
        &state.pool,
        params.status.as_deref(),
        params.program.as_deref(),
        params.search.as_deref(),
        limit,
        offset,
    )
    .await?;

    let total = EnquiryRepo::count_filtered(
        &state.pool,
        params.status.as_deref(),
        params.program.as_deref(),
        params.search.as_deref(),
    )
    .await?;

    Ok(Json(PaginatedResponse {
        data: enquiries,
        pagination: Pagination::new(page, limit, total),
    }))
}

// ---------------------------------------------------------------------------
// GET /enquiries/:id
// ---------------------------------------------------------------------------

/// Get a single enquiry by ID.
pub async fn get_enquiry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))?;

    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// PATCH /enquiries/:id/status
// ---------------------------------------------------------------------------

/// Update an enquiry's status as the lead moves through the funnel.
pub async fn update_enquiry_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnquiryStatus>,
) -> AppResult<impl IntoResponse> {
    enquiry::validate_status(&input.status)?;

    let updated = EnquiryRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))?;

    tracing::info!(enquiry_id = id, status = %input.status, "Enquiry status updated");

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// GET /enquiries/stats/overview
// ---------------------------------------------------------------------------

/// Aggregated enquiry statistics for the back-office dashboard.
pub async fn enquiry_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = EnquiryRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
