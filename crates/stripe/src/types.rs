//! Deserialization models for the Stripe objects the checkout flow reads.

use std::collections::HashMap;

use serde::Deserialize;

/// A Stripe customer.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Paginated list envelope returned by Stripe list endpoints.
#[derive(Debug, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

/// A payment intent.
///
/// `latest_charge` is only populated when the request expanded it
/// (`expand[]=latest_charge`); unexpanded responses carry a bare id
/// string, which deserializes as `None` here.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub client_secret: Option<String>,
    pub customer: Option<String>,
    #[serde(default, deserialize_with = "expanded_charge")]
    pub latest_charge: Option<Charge>,
    #[serde(default)]
    pub last_payment_error: Option<PaymentError>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// A settled (or attempted) charge.
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    pub id: String,
    pub receipt_url: Option<String>,
}

/// The error block Stripe attaches to failed intents.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentError {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// A refund.
#[derive(Debug, Clone, Deserialize)]
pub struct Refund {
    pub id: String,
    pub amount: i64,
    pub status: Option<String>,
}

/// Error envelope Stripe wraps API failures in.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

/// The inner error body of [`ErrorEnvelope`].
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// Accept either an expanded charge object or a bare charge-id string.
fn expanded_charge<'de, D>(deserializer: D) -> Result<Option<Charge>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdOrCharge {
        Charge(Charge),
        Id(String),
    }

    Ok(match Option::<IdOrCharge>::deserialize(deserializer)? {
        Some(IdOrCharge::Charge(charge)) => Some(charge),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
