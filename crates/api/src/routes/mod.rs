pub mod centers;
pub mod enquiries;
pub mod health;
pub mod payments;
pub mod programs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /enquiries                       submit (public), list
/// /enquiries/{id}                  get
/// /enquiries/{id}/status           update status (PATCH)
/// /enquiries/stats/overview        dashboard stats (GET)
///
/// /programs                        list (public), create
/// /programs/{id}                   get, update, delete
/// /programs/featured/list          featured programs (GET)
/// /programs/category/{category}    programs by category (GET)
///
/// /centers                         list (public)
/// /centers/{id}                    get
/// /centers/city/{city}             centers in a city (GET)
/// /centers/main/center             flagship center (GET)
///
/// /payments/create-intent          create processor intent (POST)
/// /payments/confirm                confirm settled payment (POST)
/// /payments/webhook                processor webhook (POST)
/// /payments                        list
/// /payments/{id}                   get
/// /payments/{id}/refund            refund (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/enquiries", enquiries::router())
        .nest("/programs", programs::router())
        .nest("/centers", centers::router())
        .nest("/payments", payments::router())
}
