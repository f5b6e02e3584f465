//! Handlers for the static center directory.
//!
//! All reads come from the compiled-in catalog in `sattva_core::center`;
//! there is no database involvement.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use sattva_core::center;
use sattva_core::error::CoreError;
use sattva_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for filtering the directory.
#[derive(Debug, Deserialize)]
pub struct CenterFilterParams {
    pub city: Option<String>,
    pub state: Option<String>,
    pub program: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /centers
// ---------------------------------------------------------------------------

/// List centers, optionally filtered by city, state, or offered program.
pub async fn list_centers(
    State(_state): State<AppState>,
    Query(params): Query<CenterFilterParams>,
) -> AppResult<impl IntoResponse> {
    let centers = center::filter(
        params.city.as_deref(),
        params.state.as_deref(),
        params.program.as_deref(),
    );
    Ok(Json(DataResponse { data: centers }))
}

// ---------------------------------------------------------------------------
// GET /centers/:id
// ---------------------------------------------------------------------------

/// Get a single center by ID.
pub async fn get_center(
    State(_state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = center::find_by_id(id).ok_or(AppError::Core(CoreError::NotFound {
        entity: "Center",
        id,
    }))?;

    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// GET /centers/city/:city
// ---------------------------------------------------------------------------

/// List the centers in a given city.
pub async fn centers_by_city(
    State(_state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<impl IntoResponse> {
    let centers = center::by_city(&city);
    Ok(Json(DataResponse { data: centers }))
}

// ---------------------------------------------------------------------------
// GET /centers/main/center
// ---------------------------------------------------------------------------

/// The flagship center highlighted on the contact page.
pub async fn main_center(State(_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let found = center::main_center().ok_or(AppError::Core(CoreError::NotFound {
        entity: "Center",
        id: 0,
    }))?;

    Ok(Json(DataResponse { data: found }))
}
