//! Page/limit pagination helpers.
//!
//! List endpoints take 1-based `page` and `limit` query parameters. These
//! helpers clamp user input and compute the derived values handlers and
//! repositories need.

/// Clamp a user-provided page number to 1-based.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to `1..=max`, with a per-route default.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Compute the SQL OFFSET for a 1-based page.
///
/// Saturates for absurdly large pages, which simply land past the last
/// row and return an empty page.
pub fn offset_for(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Compute the number of pages needed to hold `total_items` rows.
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items == 0 {
        0
    } else {
        (total_items + limit - 1) / limit
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
