use std::sync::Arc;

use sattva_stripe::StripeApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sattva_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payment processor client.
    pub stripe: Arc<StripeApi>,
}
