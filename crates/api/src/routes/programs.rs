//! Route definitions for the program catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::programs;
use crate::state::AppState;

/// Program routes mounted at `/programs`.
///
/// ```text
/// GET    /                      -> list_programs (public)
/// POST   /                      -> create_program
/// GET    /{id}                  -> get_program
/// PUT    /{id}                  -> update_program
/// DELETE /{id}                  -> delete_program
/// GET    /featured/list         -> featured_programs
/// GET    /category/{category}   -> programs_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(programs::list_programs).post(programs::create_program),
        )
        .route(
            "/{id}",
            get(programs::get_program)
                .put(programs::update_program)
                .delete(programs::delete_program),
        )
        .route("/featured/list", get(programs::featured_programs))
        .route("/category/{category}", get(programs::programs_by_category))
}
