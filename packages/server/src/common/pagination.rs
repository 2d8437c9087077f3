//! Offset-based pagination types
//!
//! # Usage
//!
//! ```rust,ignore
//! let page = PageRequest::new(query.limit, query.skip)?;
//! let total = store.count(&filter).await?;
//! let rows = store.find(&filter, page.skip, page.limit).await?;
//! let info = page.info(total);
//! ```

use thiserror::Error;

/// Page size when the caller does not ask for one.
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u64 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("limit must be between 1 and {max}, got {got}")]
    LimitOutOfRange { got: i64, max: u64 },

    #[error("skip must be zero or greater, got {0}")]
    NegativeSkip(i64),
}

// ============================================================================
// PageRequest
// ============================================================================

/// Validated `limit`/`skip` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub skip: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

impl PageRequest {
    /// Validate raw query values. `None` falls back to the defaults.
    pub fn new(limit: Option<i64>, skip: Option<i64>) -> Result<Self, PaginationError> {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(limit) if (1..=MAX_LIMIT as i64).contains(&limit) => limit as u64,
            Some(got) => {
                return Err(PaginationError::LimitOutOfRange {
                    got,
                    max: MAX_LIMIT,
                })
            }
        };

        let skip = match skip {
            None => 0,
            Some(skip) if skip >= 0 => skip as u64,
            Some(got) => return Err(PaginationError::NegativeSkip(got)),
        };

        Ok(Self { limit, skip })
    }

    /// Page metadata for a result set of `total_count` matching rows.
    pub fn info(&self, total_count: u64) -> PageInfo {
        PageInfo {
            total_count,
            limit: self.limit,
            skip: self.skip,
            has_more: total_count > self.skip.saturating_add(self.limit),
        }
    }
}

// ============================================================================
// PageInfo
// ============================================================================

/// Information about the position of a page in the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Count of every matching row, independent of `limit`/`skip`.
    pub total_count: u64,
    pub limit: u64,
    pub skip: u64,
    /// `total_count > skip + limit`
    pub has_more: bool,
}
