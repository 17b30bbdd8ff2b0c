//! Query parameters and pagination utilities

use serde::{Deserialize, Serialize};

/// Smallest page size a list call will use
pub const MIN_LIMIT: i64 = 10;

/// First page number
pub const FIRST_PAGE: i64 = 1;

/// Raw list query parameters
///
/// Values are kept as strings so a malformed number degrades to the floor
/// instead of rejecting the whole request.
///
/// # Example
/// ```text
/// GET /articles?limit=20&page=2&status=publish&category=tech&title=rust
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
}

impl ListQuery {
    /// Requested limit; unparsable values read as 0
    pub fn limit(&self) -> i64 {
        parse_or_zero(self.limit.as_deref(), MIN_LIMIT)
    }

    /// Requested page; unparsable values read as 0
    pub fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref(), FIRST_PAGE)
    }
}

fn parse_or_zero(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None => default,
        Some(s) => s.trim().parse().unwrap_or(0),
    }
}

/// Limit and page after clamping to their floors
///
/// Both values are raised to a minimum rather than defaulted only when
/// missing: asking for `limit=5` yields a limit of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
}

impl Pagination {
    pub fn clamped(limit: i64, page: i64) -> Self {
        Self {
            limit: limit.max(MIN_LIMIT),
            page: page.max(FIRST_PAGE),
        }
    }

    /// Rows to skip before this page
    ///
    /// `None` when the end of the page, `page * limit`, does not fit in an
    /// `i64`.
    pub fn offset(&self) -> Option<i64> {
        self.page.checked_mul(self.limit).map(|end| end - self.limit)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Number of items per page
    pub limit: i64,

    /// Current page number (starts at 1)
    pub page: i64,

    /// Total number of items matching the filter
    pub total: i64,

    /// Whether there is a next page
    pub has_next: bool,
}

impl PaginationMeta {
    /// Derive metadata from a limit/offset window
    pub fn from_offset(limit: i64, offset: i64, total: i64) -> Self {
        let page = if limit > 0 { offset / limit + 1 } else { 1 };

        Self {
            limit,
            page,
            total,
            has_next: offset.saturating_add(limit) < total,
        }
    }
}
