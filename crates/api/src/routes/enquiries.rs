//! Route definitions for the enquiry lead-capture endpoints.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::enquiries;
use crate::state::AppState;

/// Enquiry routes mounted at `/enquiries`.
///
/// ```text
/// POST   /                 -> submit_enquiry (public)
/// GET    /                 -> list_enquiries
/// GET    /{id}             -> get_enquiry
/// PATCH  /{id}/status      -> update_enquiry_status
/// GET    /stats/overview   -> enquiry_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(enquiries::submit_enquiry).get(enquiries::list_enquiries),
        )
        .route("/{id}", get(enquiries::get_enquiry))
        .route("/{id}/status", patch(enquiries::update_enquiry_status))
        .route("/stats/overview", get(enquiries::enquiry_stats))
}
