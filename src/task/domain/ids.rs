//! Identifier types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Ids are surrogate keys assigned by the persistence layer at insert time
/// and carry no validation of their own; an id that matches no row simply
/// resolves to "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
    /// Creates a task identifier from a raw database value.
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Reports whether the id carries no value (the zero id is never
    /// assigned by the persistence layer).
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a patient managed by an external service.
///
/// The registry stores the reference opaquely and enforces no referential
/// integrity; only positivity is validated, bounded by the `INTEGER` column
/// holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(i32);

impl PatientId {
    /// Creates a validated patient reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPatientId`] when the value is zero
    /// or negative.
    pub const fn new(value: i32) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidPatientId(value));
        }
        Ok(Self(value))
    }

    /// Returns the wrapped numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
