//! Repository port for task persistence and lookup.

use crate::task::domain::{IdPage, PageRequest, Task, TaskDraft, TaskId, TaskUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations own id and timestamp assignment and the soft-delete
/// bookkeeping. Logically deleted rows are excluded from every operation
/// except [`TaskRepository::find_by_id`], which intentionally bypasses the
/// deletion filter so administrators can retrieve deleted records.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the persisted record with its
    /// assigned id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the insert fails.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Overwrites every mutable column of an existing non-deleted task.
    ///
    /// `created_at` and `deleted_at` are never part of the written set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no non-deleted row
    /// matches the update's id.
    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<()>;

    /// Finds a task by id, including logically deleted records.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns one page of non-deleted task ids in ascending id order,
    /// together with the total non-deleted count across all pages.
    async fn list_ids(&self, page: PageRequest) -> TaskRepositoryResult<IdPage>;

    /// Marks the task with the given id as logically deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no non-deleted row
    /// matches the id.
    async fn soft_delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns all non-deleted tasks referencing the given patient, in
    /// ascending id order. Unknown patients yield an empty list.
    async fn find_by_patient(&self, patient_id: i32) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No non-deleted task matches the targeted id.
    #[error("task is not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
