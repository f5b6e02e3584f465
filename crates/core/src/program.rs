//! Program catalog vocabularies and field validation.
//!
//! A program is a bookable catalog entry (course, workshop, or
//! subscription) with pricing, schedule, and marketing copy.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CATEGORY_MEDITATION: &str = "meditation";
pub const CATEGORY_YOGA: &str = "yoga";
pub const CATEGORY_CORPORATE: &str = "corporate";
pub const CATEGORY_CHILDREN: &str = "children";
pub const CATEGORY_ADVANCED: &str = "advanced";

/// All valid program categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_MEDITATION,
    CATEGORY_YOGA,
    CATEGORY_CORPORATE,
    CATEGORY_CHILDREN,
    CATEGORY_ADVANCED,
];

/// All valid program subcategories (audience / difficulty refinement).
pub const VALID_SUBCATEGORIES: &[&str] =
    &["beginner", "intermediate", "advanced", "youth", "children"];

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum length for the long description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
/// Maximum length for the card-sized short description (characters).
pub const MAX_SHORT_DESCRIPTION_LENGTH: usize = 300;
/// Maximum length for each benefit/highlight/requirement entry (characters).
pub const MAX_LIST_ENTRY_LENGTH: usize = 200;
/// Default participant cap when none is given.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 50;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a category string is one of the known categories.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid program category '{}'. Must be one of: {:?}",
            category, VALID_CATEGORIES
        )))
    }
}

/// Validate that a subcategory string is one of the known subcategories.
pub fn validate_subcategory(subcategory: &str) -> Result<(), CoreError> {
    if VALID_SUBCATEGORIES.contains(&subcategory) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid program subcategory '{}'. Must be one of: {:?}",
            subcategory, VALID_SUBCATEGORIES
        )))
    }
}

/// Validate the program name is non-empty.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Program name is required".into()));
    }
    Ok(())
}

/// Validate the long description: required, bounded length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation("Description is required".into()));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the short description length.
pub fn validate_short_description(short: &str) -> Result<(), CoreError> {
    if short.chars().count() > MAX_SHORT_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Short description cannot exceed {MAX_SHORT_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a price in whole rupees (non-negative).
pub fn validate_price(price_inr: i64) -> Result<(), CoreError> {
    if price_inr < 0 {
        return Err(CoreError::Validation("Price cannot be negative".into()));
    }
    Ok(())
}

/// Validate a benefits/highlights/requirements list: every entry bounded.
pub fn validate_list_entries(field: &str, entries: &[String]) -> Result<(), CoreError> {
    for entry in entries {
        if entry.chars().count() > MAX_LIST_ENTRY_LENGTH {
            return Err(CoreError::Validation(format!(
                "{field} entries cannot exceed {MAX_LIST_ENTRY_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/// Validate a testimonial rating (1..=5 stars).
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(1..=5).contains(&rating) {
        return Err(CoreError::Validation(
            "Testimonial rating must be between 1 and 5".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
