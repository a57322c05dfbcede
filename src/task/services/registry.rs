//! Registry service exposing the six authenticated task operations.
//!
//! Every operation runs the same preamble: verify the bearer token, then
//! check the resulting claims for the `admin` role. Only then is the
//! payload validated and the repository invoked, so an unauthenticated
//! caller never learns whether their payload was well-formed.

use crate::auth::{AuthError, TokenVerifier};
use crate::task::{
    domain::{
        IdPage, PageRequest, Task, TaskDomainError, TaskDraft, TaskId, TaskUpdate,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Fixed denial message returned on role-check failure.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "You don't have enough permission to access this resource";

/// The single role permitted to call registry operations.
const ADMIN_ROLE: &str = "admin";

/// Calendar-date format of inbound and outbound `created_at` values.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d";

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    expertise: String,
    patient_id: i32,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, expertise: impl Into<String>, patient_id: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            expertise: expertise.into(),
            patient_id,
        }
    }

    /// Sets the optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the payload into a domain draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when any field violates its constraint.
    pub fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        TaskDraft::new(
            self.title,
            self.description.unwrap_or_default(),
            self.expertise,
            self.patient_id,
        )
    }
}

/// Request payload for a full-record task update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: i32,
    complete: bool,
    title: String,
    description: Option<String>,
    expertise: String,
    patient_id: i32,
    created_at: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        id: i32,
        complete: bool,
        title: impl Into<String>,
        expertise: impl Into<String>,
        patient_id: i32,
    ) -> Self {
        Self {
            id,
            complete,
            title: title.into(),
            description: None,
            expertise: expertise.into(),
            patient_id,
            created_at: None,
        }
    }

    /// Sets the optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches the raw `created_at` wire value.
    ///
    /// The column itself is never overwritten, but a malformed value still
    /// fails validation so callers learn about bad payloads.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Validates the payload into a domain update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingTaskId`] when the id is zero,
    /// [`TaskDomainError::InvalidCreatedAt`] when the attached timestamp
    /// does not parse, or another [`TaskDomainError`] on field-constraint
    /// violations.
    pub fn into_update(self) -> Result<TaskUpdate, TaskDomainError> {
        if let Some(raw) = self.created_at.as_deref()
            && !raw.is_empty()
        {
            NaiveDate::parse_from_str(raw, CREATED_AT_FORMAT)
                .map_err(|_| TaskDomainError::InvalidCreatedAt(raw.to_owned()))?;
        }
        TaskUpdate::new(
            TaskId::from_i32(self.id),
            self.complete,
            self.title,
            self.description.unwrap_or_default(),
            self.expertise,
            self.patient_id,
        )
    }
}

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum TaskRegistryError {
    /// Token verification failed.
    #[error(transparent)]
    Unauthenticated(#[from] AuthError),

    /// The identity lacks the `admin` role.
    #[error("{}", PERMISSION_DENIED_MESSAGE)]
    PermissionDenied,

    /// Payload validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The targeted task does not exist (or is already deleted, for
    /// mutations).
    #[error("task is not found: {0}")]
    NotFound(TaskId),

    /// Store or infrastructure failure not attributable to caller input.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskRegistryError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for registry service operations.
pub type TaskRegistryResult<T> = Result<T, TaskRegistryError>;

/// Task registry orchestration service.
pub struct TaskRegistryService<R, V>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    repository: Arc<R>,
    verifier: Arc<V>,
}

impl<R, V> Clone for TaskRegistryService<R, V>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<R, V> TaskRegistryService<R, V>
where
    R: TaskRepository,
    V: TokenVerifier,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, verifier: Arc<V>) -> Self {
        Self {
            repository,
            verifier,
        }
    }

    /// Shared preamble: authenticate the token, then require `admin`.
    async fn authorize(&self, token: &str) -> TaskRegistryResult<()> {
        let claims = self.verifier.verify(token).await?;
        if !claims.has_role(ADMIN_ROLE) {
            return Err(TaskRegistryError::PermissionDenied);
        }
        Ok(())
    }

    /// Returns the task with the given id, including logically deleted
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when no task matches the id,
    /// or an authentication/authorization error from the preamble.
    pub async fn get_task(&self, token: &str, id: TaskId) -> TaskRegistryResult<Task> {
        self.authorize(token).await?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRegistryError::NotFound(id))
    }

    /// Returns one page of non-deleted task ids plus the total count.
    ///
    /// The `search` parameter is accepted for wire compatibility but not
    /// yet applied to any filtering.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Validation`] when the pagination window
    /// is out of bounds, or an authentication/authorization error from the
    /// preamble.
    pub async fn get_tasks_ids(
        &self,
        token: &str,
        limit: i32,
        offset: i32,
        search: Option<&str>,
    ) -> TaskRegistryResult<IdPage> {
        self.authorize(token).await?;
        let page = PageRequest::new(limit, offset)?;
        // TODO: apply full-text search once the store grows a searchable
        // column; until then the parameter is a no-op passthrough.
        let _ = search;
        Ok(self.repository.list_ids(page).await?)
    }

    /// Creates a task with the given fields and returns the stored record.
    ///
    /// The completion state is forced to false regardless of input; id and
    /// creation timestamp are assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Validation`] on field-constraint
    /// violations, or an authentication/authorization error from the
    /// preamble.
    pub async fn create_task(
        &self,
        token: &str,
        request: CreateTaskRequest,
    ) -> TaskRegistryResult<Task> {
        self.authorize(token).await?;
        let draft = request.into_draft()?;
        Ok(self.repository.insert(&draft).await?)
    }

    /// Overwrites every mutable field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Validation`] when the id is missing or
    /// a field violates its constraint, [`TaskRegistryError::NotFound`]
    /// when no non-deleted row was affected, or an authentication/
    /// authorization error from the preamble.
    pub async fn update_task(
        &self,
        token: &str,
        request: UpdateTaskRequest,
    ) -> TaskRegistryResult<TaskId> {
        self.authorize(token).await?;
        let update = request.into_update()?;
        self.repository.update(&update).await?;
        Ok(update.id())
    }

    /// Marks the task with the given id as logically deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when no non-deleted row
    /// matches the id, or an authentication/authorization error from the
    /// preamble.
    pub async fn delete_task(&self, token: &str, id: TaskId) -> TaskRegistryResult<()> {
        self.authorize(token).await?;
        Ok(self.repository.soft_delete(id).await?)
    }

    /// Returns all non-deleted tasks referencing the given patient.
    ///
    /// Unknown patients yield an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns an authentication/authorization error from the preamble, or
    /// [`TaskRegistryError::Repository`] on store failure.
    pub async fn get_tasks_by_patient(
        &self,
        token: &str,
        patient_id: i32,
    ) -> TaskRegistryResult<Vec<Task>> {
        self.authorize(token).await?;
        Ok(self.repository.find_by_patient(patient_id).await?)
    }
}
