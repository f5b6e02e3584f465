//! Program catalog entity model and DTOs.
//!
//! Nested marketing content (schedule, locations, instructor,
//! testimonials) and string lists are stored as JSONB columns; the API
//! layer validates list-entry lengths before writes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sattva_core::types::{DbId, Timestamp};

/// A row from the `programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: String,
    pub short_description: Option<String>,
    pub duration: String,
    pub price_inr: i64,
    pub original_price_inr: Option<i64>,
    pub currency: String,
    pub image: String,
    pub images_json: Option<serde_json::Value>,
    pub benefits_json: Option<serde_json::Value>,
    pub highlights_json: Option<serde_json::Value>,
    pub schedule_json: Option<serde_json::Value>,
    pub locations_json: Option<serde_json::Value>,
    pub instructor_json: Option<serde_json::Value>,
    pub max_participants: i32,
    pub current_participants: i32,
    pub is_online: bool,
    pub is_active: bool,
    pub featured: bool,
    pub tags_json: Option<serde_json::Value>,
    pub requirements_json: Option<serde_json::Value>,
    pub testimonials_json: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a program.
///
/// `PUT /programs/{id}` reuses this shape: the original back office sends
/// the complete record on update.
#[derive(Debug, Deserialize)]
pub struct CreateProgram {
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: String,
    pub short_description: Option<String>,
    pub duration: String,
    pub price_inr: i64,
    pub original_price_inr: Option<i64>,
    pub currency: Option<String>,
    pub image: String,
    pub images_json: Option<serde_json::Value>,
    pub benefits_json: Option<serde_json::Value>,
    pub highlights_json: Option<serde_json::Value>,
    pub schedule_json: Option<serde_json::Value>,
    pub locations_json: Option<serde_json::Value>,
    pub instructor_json: Option<serde_json::Value>,
    pub max_participants: Option<i32>,
    pub current_participants: Option<i32>,
    pub is_online: Option<bool>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
    pub tags_json: Option<serde_json::Value>,
    pub requirements_json: Option<serde_json::Value>,
    pub testimonials_json: Option<serde_json::Value>,
}

/// Query parameters for listing programs.
#[derive(Debug, Deserialize)]
pub struct ProgramListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}
