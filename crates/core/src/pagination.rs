//! Page/limit normalisation for list endpoints.
//!
//! Query strings arrive as raw text. Anything that does not parse as an
//! integer is treated as if it had not been sent, so a request never fails
//! because of a bad `page` or `limit` value.

use serde::Serialize;

/// Page size used when the client sends none, or one outside the allowed range.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// A normalised `(page, limit)` pair. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Build from already-parsed values.
    ///
    /// A page below 1 becomes 1. A limit outside `1..=MAX_LIMIT` falls back
    /// to [`DEFAULT_LIMIT`] rather than being clamped to the nearest bound.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = match limit {
            Some(l) if (1..=MAX_LIMIT).contains(&l) => l,
            _ => DEFAULT_LIMIT,
        };
        Self { page, limit }
    }

    /// Build from raw query-string values.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(parse_int(page), parse_int(limit))
    }

    /// First-page pagination with a fixed size, used by the HTML views.
    pub fn first(limit: i64) -> Self {
        Self::new(Some(1), Some(limit))
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}
