//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; paginated listings
//! add a `pagination` block. Use these instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety and consistent
//! serialization.

use serde::Serialize;

use sattva_core::pagination::total_pages;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl Pagination {
    /// Build the block from the request's page/limit and the filtered count.
    pub fn new(page: i64, limit: i64, total_items: i64) -> Self {
        Self {
            current_page: page,
            total_pages: total_pages(total_items, limit),
            total_items,
            items_per_page: limit,
        }
    }
}

/// `{ "data": [...], "pagination": {...} }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
