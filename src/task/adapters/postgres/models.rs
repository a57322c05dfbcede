//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::TaskDraft;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Surrogate key.
    pub id: i32,
    /// Completion state.
    pub complete: bool,
    /// Task title.
    pub title: String,
    /// Free-text description (empty string when absent).
    pub description: String,
    /// Required expertise tag.
    pub expertise: String,
    /// Opaque patient reference.
    pub patient_id: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Logical-deletion timestamp, when set.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
///
/// `id` and `created_at` are left to their column defaults so the database
/// stays the single assigner of both.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Completion state; always false at creation.
    pub complete: bool,
    /// Task title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Required expertise tag.
    pub expertise: String,
    /// Opaque patient reference.
    pub patient_id: i32,
}

impl NewTaskRow {
    /// Builds an insert row from a validated draft.
    #[must_use]
    pub fn from_draft(draft: &TaskDraft) -> Self {
        Self {
            complete: false,
            title: draft.title().as_str().to_owned(),
            description: draft.description().as_str().to_owned(),
            expertise: draft.expertise().as_str().to_owned(),
            patient_id: draft.patient_id().value(),
        }
    }
}
