//! Pagination types
//!
//! List endpoints take `skip`/`limit` query parameters. Out-of-range
//! values are rejected rather than clamped.

use serde::Deserialize;

use super::ValidationError;

/// Maximum items per request
pub const MAX_LIMIT: i64 = 100;

/// Default items per request
pub const DEFAULT_LIMIT: i64 = 10;

/// Validated offset/limit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Page {
    /// Create a page window.
    ///
    /// - `skip` must be non-negative
    /// - `limit` must be within 1..=100
    pub fn new(skip: i64, limit: i64) -> Result<Self, ValidationError> {
        if skip < 0 {
            return Err(ValidationError::OutOfRange {
                field: "skip",
                min: 0,
                max: i64::MAX,
                value: skip,
            });
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                max: MAX_LIMIT,
                value: limit,
            });
        }

        Ok(Self { skip, limit })
    }

    /// SQL OFFSET value.
    pub fn skip(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for `/games/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl TryFrom<PageParams> for Page {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

/// Query parameters for `/boardgames/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardGameQuery {
    pub search: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl BoardGameQuery {
    /// Search term, if one was given. An empty `search=` means no filter.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Validated page window.
    pub fn page(&self) -> Result<Page, ValidationError> {
        Page::try_from(PageParams {
            skip: self.skip,
            limit: self.limit,
        })
    }
}
