//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title must not exceed {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual length of the rejected value.
        actual: usize,
    },

    /// The task description exceeds the maximum length.
    #[error("task description must not exceed {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual length of the rejected value.
        actual: usize,
    },

    /// The required expertise is empty.
    #[error("task expertise must not be empty")]
    EmptyExpertise,

    /// The required expertise exceeds the maximum length.
    #[error("task expertise must not exceed {max} characters, got {actual}")]
    ExpertiseTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual length of the rejected value.
        actual: usize,
    },

    /// The patient reference is not a positive integer.
    #[error("invalid patient id {0}, expected a positive integer")]
    InvalidPatientId(i32),

    /// An update payload arrived without a task id.
    #[error("task id is required")]
    MissingTaskId,

    /// The pagination offset is negative.
    #[error("offset has to be a non-negative integer, got {0}")]
    NegativeOffset(i32),

    /// The pagination limit is zero or negative.
    #[error("limit has to be a positive integer, got {0}")]
    NonPositiveLimit(i32),

    /// The pagination limit exceeds the maximum page size.
    #[error("maximum allowed limit value is {max}, got {actual}")]
    LimitTooLarge {
        /// Maximum permitted page size.
        max: i32,
        /// Actual limit of the rejected request.
        actual: i32,
    },

    /// An inbound creation timestamp does not follow the wire date format.
    #[error("invalid created_at value '{0}', expected YYYY-MM-DD")]
    InvalidCreatedAt(String),
}
