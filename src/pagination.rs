//! Pagination utilities for camcade-scores
//!
//! All leaderboard reads share the same limit/offset rules: limit
//! defaults to 5 and is clamped to [1, 20], offset defaults to 0 and is
//! clamped to be non-negative. Out-of-range values are sanitized, not
//! rejected, and the effective values are echoed back in every page
//! response.

/// Default number of entries per page
pub const DEFAULT_LIMIT: i64 = 5;

/// Maximum number of entries per page
pub const MAX_LIMIT: i64 = 20;

/// Sanitized limit/offset pair used for SQL LIMIT/OFFSET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Entries per page, within [1, MAX_LIMIT]
    pub limit: i64,
    /// Entries to skip, >= 0
    pub offset: i64,
}

/// Clamp requested limit/offset into their valid ranges
///
/// # Arguments
/// * `limit` - Requested page size (may be out of bounds)
/// * `offset` - Requested number of entries to skip (may be negative)
///
/// # Examples
/// ```
/// use camcade_scores::pagination::clamp_page;
///
/// let p = clamp_page(1000, -3);
/// assert_eq!(p.limit, 20);
/// assert_eq!(p.offset, 0);
/// ```
pub fn clamp_page(limit: i64, offset: i64) -> PageParams {
    PageParams {
        limit: limit.clamp(1, MAX_LIMIT),
        offset: offset.max(0),
    }
}
