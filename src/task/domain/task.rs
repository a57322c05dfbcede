//! Task aggregate root and its creation and update payloads.

use super::{Expertise, PatientId, TaskDescription, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};

/// A persisted task record.
///
/// Lifecycle: `nonexistent -> active -> logically deleted`. The persistence
/// layer assigns `id` and `created_at` at insert; both are immutable
/// afterwards. A non-null `deleted_at` marks the record as logically
/// deleted, which hides it from every read path except direct lookup by id.
/// No public operation returns a deleted record to the active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    complete: bool,
    title: TaskTitle,
    description: TaskDescription,
    expertise: Expertise,
    patient_id: PatientId,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted state.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            complete,
            title,
            description,
            expertise,
            patient_id,
            created_at,
            deleted_at,
        } = data;
        Self {
            id,
            complete,
            title,
            description,
            expertise,
            patient_id,
            created_at,
            deleted_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Reports whether the task has been completed.
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.complete
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the required expertise tag.
    #[must_use]
    pub const fn expertise(&self) -> &Expertise {
        &self.expertise
    }

    /// Returns the associated patient reference.
    #[must_use]
    pub const fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the logical-deletion timestamp, when set.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Reports whether the task is logically deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Overwrites every mutable field from an update payload.
    ///
    /// `id`, `created_at`, and `deleted_at` are never touched.
    pub fn apply(&mut self, update: &TaskUpdate) {
        self.complete = update.complete();
        self.title = update.title().clone();
        self.description = update.description().clone();
        self.expertise = update.expertise().clone();
        self.patient_id = update.patient_id();
    }

    /// Marks the task as logically deleted at the given instant.
    ///
    /// Deletion timestamps are write-once; a second deletion leaves the
    /// original timestamp in place.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
    }
}

/// Raw persisted state used to reconstruct a [`Task`].
#[derive(Debug, Clone)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Completion state.
    pub complete: bool,
    /// Validated title.
    pub title: TaskTitle,
    /// Validated description.
    pub description: TaskDescription,
    /// Validated expertise tag.
    pub expertise: Expertise,
    /// Associated patient reference.
    pub patient_id: PatientId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Logical-deletion timestamp, when set.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Validated payload for creating a task.
///
/// Drafts always start incomplete; the completion state is not an input of
/// the create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: TaskDescription,
    expertise: Expertise,
    patient_id: PatientId,
}

impl TaskDraft {
    /// Creates a validated draft from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when any field violates its constraint.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        expertise: impl Into<String>,
        patient_id: i32,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: TaskDescription::new(description)?,
            expertise: Expertise::new(expertise)?,
            patient_id: PatientId::new(patient_id)?,
        })
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the draft expertise tag.
    #[must_use]
    pub const fn expertise(&self) -> &Expertise {
        &self.expertise
    }

    /// Returns the draft patient reference.
    #[must_use]
    pub const fn patient_id(&self) -> PatientId {
        self.patient_id
    }
}

/// Validated payload for a full-record update.
///
/// Carries every mutable column; `created_at` and `deleted_at` are excluded
/// from the overwritten set by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    id: TaskId,
    complete: bool,
    title: TaskTitle,
    description: TaskDescription,
    expertise: Expertise,
    patient_id: PatientId,
}

impl TaskUpdate {
    /// Creates a validated update payload from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingTaskId`] when `id` is zero, or
    /// another [`TaskDomainError`] when a field violates its constraint.
    pub fn new(
        id: TaskId,
        complete: bool,
        title: impl Into<String>,
        description: impl Into<String>,
        expertise: impl Into<String>,
        patient_id: i32,
    ) -> Result<Self, TaskDomainError> {
        if id.is_unset() {
            return Err(TaskDomainError::MissingTaskId);
        }
        Ok(Self {
            id,
            complete,
            title: TaskTitle::new(title)?,
            description: TaskDescription::new(description)?,
            expertise: Expertise::new(expertise)?,
            patient_id: PatientId::new(patient_id)?,
        })
    }

    /// Returns the id of the task to update.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the new completion state.
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.complete
    }

    /// Returns the new title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the new description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the new expertise tag.
    #[must_use]
    pub const fn expertise(&self) -> &Expertise {
        &self.expertise
    }

    /// Returns the new patient reference.
    #[must_use]
    pub const fn patient_id(&self) -> PatientId {
        self.patient_id
    }
}
