//! Pagination bounds for list endpoints (`?skip=&take=`).

/// Rows skipped when the caller does not specify `skip`.
pub const DEFAULT_SKIP: i64 = 0;

/// Rows returned when the caller does not specify `take`.
pub const DEFAULT_TAKE: i64 = 50;

/// Clamp a user-provided `skip` to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(DEFAULT_SKIP).max(0)
}

/// Clamp a user-provided `take` to non-negative.
///
/// Zero is allowed and yields an empty page. There is no upper bound.
pub fn clamp_take(take: Option<i64>) -> i64 {
    take.unwrap_or(DEFAULT_TAKE).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
