//! Enquiry entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sattva_core::types::{DbId, Timestamp};

/// A row from the `enquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub pincode: String,
    pub program: String,
    pub preferred_location: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub status: String,
    pub source: String,
    pub marketing_consent: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new enquiry from the web form.
#[derive(Debug, Deserialize)]
pub struct CreateEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub pincode: String,
    pub program: String,
    pub preferred_location: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub marketing_consent: bool,
}

/// DTO for updating an enquiry's status.
#[derive(Debug, Deserialize)]
pub struct UpdateEnquiryStatus {
    pub status: String,
}

/// Query parameters for listing enquiries.
#[derive(Debug, Deserialize)]
pub struct EnquiryListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub program: Option<String>,
    pub search: Option<String>,
}

/// One status bucket in the enquiry statistics overview.
#[derive(Debug, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// One program bucket in the enquiry statistics overview.
#[derive(Debug, FromRow, Serialize)]
pub struct ProgramCount {
    pub program: String,
    pub count: i64,
}

/// Aggregated enquiry statistics for the back-office dashboard.
#[derive(Debug, Serialize)]
pub struct EnquiryStats {
    pub total: i64,
    pub today: i64,
    pub status_breakdown: Vec<StatusCount>,
    pub top_programs: Vec<ProgramCount>,
}
