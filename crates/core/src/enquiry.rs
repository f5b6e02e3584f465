//! Enquiry status/source vocabularies and field validation.
//!
//! An enquiry is a lead-capture record submitted through the public web
//! form. Validation limits mirror what the enquiry form enforces
//! client-side, so the API rejects anything the form could not have sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly submitted enquiry.
pub const STATUS_PENDING: &str = "pending";
/// A coordinator has reached out to the lead.
pub const STATUS_CONTACTED: &str = "contacted";
/// The lead paid and enrolled in a program.
pub const STATUS_ENROLLED: &str = "enrolled";
/// The enrolled program has finished.
pub const STATUS_COMPLETED: &str = "completed";
/// The lead withdrew or the enquiry was closed without enrollment.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid enquiry statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_CONTACTED,
    STATUS_ENROLLED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

// ---------------------------------------------------------------------------
// Source constants
// ---------------------------------------------------------------------------

/// Default source for form submissions.
pub const SOURCE_WEBSITE: &str = "website";

/// All valid enquiry sources.
pub const VALID_SOURCES: &[&str] = &["website", "phone", "walk-in", "referral"];

// ---------------------------------------------------------------------------
// Program selection vocabulary
// ---------------------------------------------------------------------------

/// Program names the enquiry form offers. "Other" is the catch-all for
/// leads interested in something not yet in the catalog.
pub const VALID_PROGRAMS: &[&str] = &[
    "Happiness Program",
    "Happiness Program for Youth",
    "Sahaj Samadhi Dhyana Yoga",
    "Online Meditation and Breath Workshop",
    "Advanced Meditation Program",
    "Sri Sri Yoga Classes",
    "Daily Online Yoga Subscription",
    "Utkarsha Yoga",
    "Medha Yoga Level 1",
    "Medha Yoga Level 2",
    "Corporate Programs",
    "Other",
];

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Minimum length for the contact name (characters).
pub const MIN_NAME_LENGTH: usize = 2;
/// Maximum length for the contact name (characters).
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length for the free-text message (characters).
pub const MAX_MESSAGE_LENGTH: usize = 1000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));

static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid pincode regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the contact name length.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len < MIN_NAME_LENGTH || len > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name must be between {MIN_NAME_LENGTH} and {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the email address format.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please enter a valid email address".into(),
        ))
    }
}

/// Validate a phone number: optional `+`, no leading zero, up to 16 digits.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please enter a valid phone number".into(),
        ))
    }
}

/// Validate a 6-digit Indian postal code.
pub fn validate_pincode(pincode: &str) -> Result<(), CoreError> {
    if PINCODE_RE.is_match(pincode) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please enter a valid 6-digit pincode".into(),
        ))
    }
}

/// Validate that a program selection is one of the offered names.
pub fn validate_program(program: &str) -> Result<(), CoreError> {
    if VALID_PROGRAMS.contains(&program) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please select a valid program".into(),
        ))
    }
}

/// Validate the free-text message length.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message cannot exceed {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid enquiry status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate that a source string is one of the known sources.
pub fn validate_source(source: &str) -> Result<(), CoreError> {
    if VALID_SOURCES.contains(&source) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid enquiry source '{}'. Must be one of: {:?}",
            source, VALID_SOURCES
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- name ---------------------------------------------------------------

    #[test]
    fn name_within_bounds_is_valid() {
        assert!(validate_name("Asha Rao").is_ok());
    }

    #[test]
    fn single_character_name_is_rejected() {
        assert!(validate_name("A").is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    // -- email --------------------------------------------------------------

    #[test]
    fn plain_email_is_valid() {
        assert!(validate_email("asha.rao@example.com").is_ok());
    }

    #[test]
    fn email_without_domain_is_rejected() {
        assert!(validate_email("asha@").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    // -- phone --------------------------------------------------------------

    #[test]
    fn phone_with_country_code_is_valid() {
        assert!(validate_phone("+919876543210").is_ok());
    }

    #[test]
    fn phone_without_plus_is_valid() {
        assert!(validate_phone("9876543210").is_ok());
    }

    #[test]
    fn phone_with_leading_zero_is_rejected() {
        assert!(validate_phone("0987654321").is_err());
    }

    #[test]
    fn phone_with_letters_is_rejected() {
        assert!(validate_phone("98765abc10").is_err());
    }

    // -- pincode ------------------------------------------------------------

    #[test]
    fn six_digit_pincode_is_valid() {
        assert!(validate_pincode("560082").is_ok());
    }

    #[test]
    fn short_pincode_is_rejected() {
        assert!(validate_pincode("5600").is_err());
    }

    #[test]
    fn alphanumeric_pincode_is_rejected() {
        assert!(validate_pincode("56008a").is_err());
    }

    // -- program / status / source ------------------------------------------

    #[test]
    fn known_program_is_valid() {
        assert!(validate_program("Happiness Program").is_ok());
    }

    #[test]
    fn unknown_program_is_rejected() {
        assert!(validate_program("Levitation 101").is_err());
    }

    #[test]
    fn all_statuses_validate() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
        assert!(validate_status("archived").is_err());
    }

    #[test]
    fn all_sources_validate() {
        for source in VALID_SOURCES {
            assert!(validate_source(source).is_ok());
        }
        assert!(validate_source("carrier-pigeon").is_err());
    }

    // -- message ------------------------------------------------------------

    #[test]
    fn message_at_limit_is_valid() {
        assert!(validate_message(&"m".repeat(MAX_MESSAGE_LENGTH)).is_ok());
    }

    #[test]
    fn overlong_message_is_rejected() {
        assert!(validate_message(&"m".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }
}
