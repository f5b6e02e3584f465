//! Webhook signature verification and event parsing.
//!
//! Stripe signs each webhook delivery with the endpoint secret:
//! `Stripe-Signature: t=<unix>,v1=<hex hmac>[,v1=...]` where the HMAC is
//! SHA-256 over `"{t}.{raw body}"`. Verification recomputes the HMAC and
//! compares in constant time, and rejects deliveries whose timestamp is
//! outside the replay tolerance.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::types::PaymentIntent;

type HmacSha256 = Hmac<Sha256>;

/// Replay tolerance matching Stripe's documented default.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Event type for a successfully settled payment intent.
pub const EVENT_PAYMENT_SUCCEEDED: &str = "payment_intent.succeeded";
/// Event type for a failed payment attempt.
pub const EVENT_PAYMENT_FAILED: &str = "payment_intent.payment_failed";

/// Errors from webhook verification and parsing.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The `Stripe-Signature` header did not contain `t=` and `v1=` parts.
    #[error("Malformed Stripe-Signature header")]
    MalformedHeader,

    /// The delivery timestamp is outside the replay tolerance.
    #[error("Webhook timestamp outside tolerance")]
    TimestampOutOfTolerance,

    /// No candidate signature matched the recomputed HMAC.
    #[error("Webhook signature mismatch")]
    SignatureMismatch,

    /// The payload was not a valid event body.
    #[error("Failed to parse webhook event: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A decoded webhook event.
///
/// `data.object` stays as raw JSON; use [`Event::payment_intent`] for the
/// payment-intent event types this platform handles.
#[derive(Debug, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

/// The `data` block of an event.
#[derive(Debug, Deserialize)]
pub struct EventData {
    pub object: serde_json::Value,
}

impl Event {
    /// Decode the event's object as a payment intent.
    pub fn payment_intent(&self) -> Result<PaymentIntent, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Verify a delivery's signature and parse the event, using the current
/// system clock for the tolerance check.
pub fn construct_event(
    payload: &[u8],
    signature_header: &str,
    secret: &str,
) -> Result<Event, WebhookError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    construct_event_at(payload, signature_header, secret, now)
}

/// Clock-injectable variant of [`construct_event`].
pub fn construct_event_at(
    payload: &[u8],
    signature_header: &str,
    secret: &str,
    now_unix: i64,
) -> Result<Event, WebhookError> {
    verify_signature_at(payload, signature_header, secret, now_unix)?;
    Ok(serde_json::from_slice(payload)?)
}

/// Verify the `Stripe-Signature` header against the raw payload.
pub fn verify_signature_at(
    payload: &[u8],
    signature_header: &str,
    secret: &str,
    now_unix: i64,
) -> Result<(), WebhookError> {
    let (timestamp, candidates) = parse_header(signature_header)?;

    // Extreme `t=` values must reject, not overflow.
    if now_unix.saturating_sub(timestamp).saturating_abs() > DEFAULT_TOLERANCE_SECS {
        return Err(WebhookError::TimestampOutOfTolerance);
    }

    // The signed payload is "{t}.{body}" with the body byte-exact.
    let mut signed = timestamp.to_string().into_bytes();
    signed.push(b'.');
    signed.extend_from_slice(payload);

    for candidate in candidates {
        let Some(sig_bytes) = hex::decode(candidate) else {
            continue;
        };
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(&signed);
        if mac.verify_slice(&sig_bytes).is_ok() {
            return Ok(());
        }
    }

    Err(WebhookError::SignatureMismatch)
}

/// Compute the hex signature for a payload at a timestamp. Used by tests
/// to fabricate valid deliveries.
pub fn sign_payload(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let mut signed = timestamp.to_string().into_bytes();
    signed.push(b'.');
    signed.extend_from_slice(payload);

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(&signed);
    hex::encode(mac.finalize().into_bytes())
}

// ---- private helpers ----

/// Split the header into its timestamp and `v1` signature candidates.
fn parse_header(header: &str) -> Result<(i64, Vec<&str>), WebhookError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => {
                timestamp = value.parse().ok();
            }
            Some(("v1", value)) => candidates.push(value),
            _ => {}
        }
    }

    match (timestamp, candidates.is_empty()) {
        (Some(t), false) => Ok((t, candidates)),
        _ => Err(WebhookError::MalformedHeader),
    }
}

// ---------------------------------------------------------------------------
// hex helpers (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string, returning `None` on any invalid digit.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
