//! Pagination parameters and results for id listings.

use super::{TaskDomainError, TaskId};

/// Validated pagination window for id listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i32,
    offset: i32,
}

impl PageRequest {
    /// Largest permitted page size.
    pub const MAX_LIMIT: i32 = 50;

    /// Creates a validated pagination window.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NegativeOffset`] when `offset` is
    /// negative, [`TaskDomainError::NonPositiveLimit`] when `limit` is zero
    /// or negative, or [`TaskDomainError::LimitTooLarge`] when `limit`
    /// exceeds [`Self::MAX_LIMIT`].
    pub const fn new(limit: i32, offset: i32) -> Result<Self, TaskDomainError> {
        if offset < 0 {
            return Err(TaskDomainError::NegativeOffset(offset));
        }
        if limit <= 0 {
            return Err(TaskDomainError::NonPositiveLimit(limit));
        }
        if limit > Self::MAX_LIMIT {
            return Err(TaskDomainError::LimitTooLarge {
                max: Self::MAX_LIMIT,
                actual: limit,
            });
        }
        Ok(Self { limit, offset })
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(self) -> i32 {
        self.limit
    }

    /// Returns the number of leading records to skip.
    #[must_use]
    pub const fn offset(self) -> i32 {
        self.offset
    }
}

/// One page of task ids together with the total count of records matching
/// the listing filter, computed independently of the pagination window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPage {
    /// Ids within the requested window, in ascending id order.
    pub ids: Vec<TaskId>,
    /// Total number of matching records across all pages.
    pub total: u64,
}
