//! Route definitions for the static center directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::centers;
use crate::state::AppState;

/// Center routes mounted at `/centers`.
///
/// ```text
/// GET    /              -> list_centers (public)
/// GET    /{id}          -> get_center
/// GET    /city/{city}   -> centers_by_city
/// GET    /main/center   -> main_center
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(centers::list_centers))
        .route("/{id}", get(centers::get_center))
        .route("/city/{city}", get(centers::centers_by_city))
        .route("/main/center", get(centers::main_center))
}
