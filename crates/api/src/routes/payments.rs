//! Route definitions for the payment checkout flow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Payment routes mounted at `/payments`.
///
/// ```text
/// POST   /create-intent   -> create_payment_intent
/// POST   /confirm         -> confirm_payment
/// POST   /webhook         -> stripe_webhook (signature-verified)
/// GET    /                -> list_payments
/// GET    /{id}            -> get_payment
/// POST   /{id}/refund     -> refund_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-intent", post(payments::create_payment_intent))
        .route("/confirm", post(payments::confirm_payment))
        .route("/webhook", post(payments::stripe_webhook))
        .route("/", get(payments::list_payments))
        .route("/{id}", get(payments::get_payment))
        .route("/{id}/refund", post(payments::refund_payment))
}
