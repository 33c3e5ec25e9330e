//! Listing constants and helpers for paginated product queries.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API/repository layer and the client crate.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of products per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of products per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Sort order for product listings.
///
/// Anything other than the two price orders falls back to newest-first
/// (descending id), which is also what an absent `sort` parameter means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    #[default]
    Newest,
}

impl SortOrder {
    /// Parse a wire-level `sort` parameter. Unknown or absent values map to
    /// [`SortOrder::Newest`].
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("price_asc") => SortOrder::PriceAsc,
            Some("price_desc") => SortOrder::PriceDesc,
            _ => SortOrder::Newest,
        }
    }

    /// The wire-level value for this sort order, `None` for the default.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortOrder::PriceAsc => Some("price_asc"),
            SortOrder::PriceDesc => Some("price_desc"),
            SortOrder::Newest => None,
        }
    }

    /// The ORDER BY clause body for this sort order.
    pub fn order_by(self) -> &'static str {
        match self {
            SortOrder::PriceAsc => "price ASC",
            SortOrder::PriceDesc => "price DESC",
            SortOrder::Newest => "id DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Clamping helpers
// ---------------------------------------------------------------------------

/// Clamp a user-provided page number to >= 1.
///
/// A page of zero or less would produce a negative OFFSET, so it is clamped
/// rather than rejected.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided limit to valid bounds.
///
/// A limit of zero would divide by zero in [`page_count`], so the lower bound
/// is 1.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Compute the OFFSET for a (1-based) page and limit.
///
/// Callers must clamp both values first; with `page >= 1` and `limit >= 1`
/// the result is always non-negative.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Number of pages needed for `total` records at `limit` per page.
///
/// `ceil(total / limit)`; zero records means zero pages.
pub fn page_count(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
