//! Payment entity model and DTOs.
//!
//! A payment row references the enquiry and program it pays for and
//! mirrors the processor's intent lifecycle. The customer snapshot
//! columns (`customer_*`, `program_name`) denormalize the enquiry and
//! program at intent-creation time so receipts stay stable even if the
//! source records change.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sattva_core::types::{DbId, Timestamp};

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub enquiry_id: DbId,
    pub program_id: DbId,
    pub amount_inr: i64,
    pub currency: String,
    pub payment_method: String,
    pub stripe_payment_intent_id: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub status: String,
    pub transaction_id: Option<String>,
    pub receipt_url: Option<String>,
    pub failure_reason: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub program_name: Option<String>,
    pub gateway: String,
    pub refund_amount_inr: i64,
    pub refund_reason: Option<String>,
    pub refunded_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload built by the create-intent handler after the processor
/// intent exists.
#[derive(Debug)]
pub struct CreatePayment {
    pub enquiry_id: DbId,
    pub program_id: DbId,
    pub amount_inr: i64,
    pub currency: String,
    pub payment_method: String,
    pub stripe_payment_intent_id: String,
    pub stripe_customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub program_name: String,
}

/// Query parameters for listing payments.
#[derive(Debug, Deserialize)]
pub struct PaymentListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub payment_method: Option<String>,
}
