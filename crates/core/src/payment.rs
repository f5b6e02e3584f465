//! Payment status/method vocabularies, refund rules, and currency helpers.
//!
//! Local payment records mirror the payment processor's lifecycle: a row
//! is created `pending` alongside the processor intent and updated to a
//! terminal status from the confirm endpoint or the processor webhook.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Intent created, awaiting customer action.
pub const STATUS_PENDING: &str = "pending";
/// Processor reported the charge in flight.
pub const STATUS_PROCESSING: &str = "processing";
/// Processor reported the charge succeeded.
pub const STATUS_COMPLETED: &str = "completed";
/// Processor reported the charge failed.
pub const STATUS_FAILED: &str = "failed";
/// Checkout abandoned or cancelled before completion.
pub const STATUS_CANCELLED: &str = "cancelled";
/// A completed payment has been refunded.
pub const STATUS_REFUNDED: &str = "refunded";

/// All valid payment statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_PROCESSING,
    STATUS_COMPLETED,
    STATUS_FAILED,
    STATUS_CANCELLED,
    STATUS_REFUNDED,
];

// ---------------------------------------------------------------------------
// Payment method constants
// ---------------------------------------------------------------------------

/// All valid payment methods offered at checkout.
pub const VALID_METHODS: &[&str] = &["card", "upi", "netbanking", "wallet", "emi"];

/// Default currency for the catalog and all charges.
pub const DEFAULT_CURRENCY: &str = "inr";

/// Gateway identifier recorded on payment rows.
pub const GATEWAY_STRIPE: &str = "stripe";

/// Maximum chargeable amount in whole rupees (one crore).
///
/// Well above any catalog price, and keeps the paise conversion far away
/// from `i64` overflow for request-supplied amounts.
pub const MAX_AMOUNT_INR: i64 = 10_000_000;

// ---------------------------------------------------------------------------
// Currency conversion
// ---------------------------------------------------------------------------

/// Convert a whole-rupee amount to paise (the processor's minor unit).
///
/// Saturates rather than overflows; amounts are bounded by
/// [`validate_amount`] before they reach this conversion.
pub fn to_paise(amount_inr: i64) -> i64 {
    amount_inr.saturating_mul(100)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid payment status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate that a payment method is one of the offered methods.
pub fn validate_method(method: &str) -> Result<(), CoreError> {
    if VALID_METHODS.contains(&method) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid payment method '{}'. Must be one of: {:?}",
            method, VALID_METHODS
        )))
    }
}

/// Validate a charge amount in whole rupees (strictly positive, bounded).
pub fn validate_amount(amount_inr: i64) -> Result<(), CoreError> {
    if amount_inr <= 0 {
        return Err(CoreError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    if amount_inr > MAX_AMOUNT_INR {
        return Err(CoreError::Validation(format!(
            "Amount cannot exceed {MAX_AMOUNT_INR} rupees"
        )));
    }
    Ok(())
}

/// Validate that a payment in `current_status` may be refunded.
///
/// Only completed payments are refundable; everything else either never
/// charged the customer or was already refunded.
pub fn validate_refundable(current_status: &str) -> Result<(), CoreError> {
    if current_status == STATUS_COMPLETED {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Only completed payments can be refunded".into(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_validate() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
        assert!(validate_status("settled").is_err());
    }

    #[test]
    fn all_methods_validate() {
        for method in VALID_METHODS {
            assert!(validate_method(method).is_ok());
        }
        assert!(validate_method("cheque").is_err());
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(validate_amount(0).is_err());
        assert!(validate_amount(-500).is_err());
        assert!(validate_amount(2500).is_ok());
    }

    #[test]
    fn amount_is_capped() {
        assert!(validate_amount(MAX_AMOUNT_INR).is_ok());
        assert!(validate_amount(MAX_AMOUNT_INR + 1).is_err());
        assert!(validate_amount(i64::MAX).is_err());
    }

    #[test]
    fn rupees_convert_to_paise() {
        assert_eq!(to_paise(1), 100);
        assert_eq!(to_paise(2500), 250_000);
    }

    #[test]
    fn paise_conversion_saturates_instead_of_overflowing() {
        assert_eq!(to_paise(i64::MAX), i64::MAX);
    }

    #[test]
    fn only_completed_payments_are_refundable() {
        assert!(validate_refundable(STATUS_COMPLETED).is_ok());
        for status in [
            STATUS_PENDING,
            STATUS_PROCESSING,
            STATUS_FAILED,
            STATUS_CANCELLED,
            STATUS_REFUNDED,
        ] {
            assert!(validate_refundable(status).is_err());
        }
    }
}
