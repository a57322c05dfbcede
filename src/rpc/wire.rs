//! Wire DTOs for the remote-procedure surface.
//!
//! Timestamps cross the wire as fixed `YYYY-MM-DD` calendar-date strings.
//! The logical-deletion timestamp is internal bookkeeping and never
//! appears in any DTO.

use crate::task::domain::Task;
use crate::task::services::{CreateTaskRequest as CreateTask, UpdateTaskRequest as UpdateTask};
use serde::{Deserialize, Serialize};

/// Calendar-date format of the `created_at` wire field.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d";

/// Wire representation of a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    /// Task identifier; zero on payloads that have not been persisted.
    #[serde(default)]
    pub id: i32,
    /// Completion state.
    #[serde(default)]
    pub complete: bool,
    /// Task title.
    pub title: String,
    /// Optional description; empty string when absent.
    #[serde(default)]
    pub description: String,
    /// Required expertise tag.
    pub expertise: String,
    /// Opaque patient reference.
    pub patient_id: i32,
    /// Creation date in `YYYY-MM-DD`; empty on unpersisted payloads.
    #[serde(default)]
    pub created_at: String,
}

impl TaskDto {
    /// Builds the wire representation of a stored task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            complete: task.complete(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            expertise: task.expertise().as_str().to_owned(),
            patient_id: task.patient_id().value(),
            created_at: task.created_at().format(CREATED_AT_FORMAT).to_string(),
        }
    }

    /// Converts an inbound DTO into a full-record update payload.
    #[must_use]
    pub fn into_update_request(self) -> UpdateTask {
        let mut request = UpdateTask::new(
            self.id,
            self.complete,
            self.title,
            self.expertise,
            self.patient_id,
        )
        .with_created_at(self.created_at);
        if !self.description.is_empty() {
            request = request.with_description(self.description);
        }
        request
    }
}

/// Request for the get-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTaskRequest {
    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,
    /// Id of the task to fetch.
    pub id: i32,
}

/// Response of the get-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTaskResponse {
    /// The requested task.
    pub task: TaskDto,
}

/// Request for the paginated id listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTasksIdsRequest {
    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,
    /// Page size, in `(0, 50]`.
    #[serde(default)]
    pub limit: i32,
    /// Number of leading records to skip, non-negative.
    #[serde(default)]
    pub offset: i32,
    /// Reserved for future full-text search; currently ignored.
    #[serde(default)]
    pub search: Option<String>,
}

/// Response of the paginated id listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTasksIdsResponse {
    /// Total number of non-deleted tasks across all pages.
    pub count: u64,
    /// Ids within the requested window.
    pub results: Vec<i32>,
}

/// Request for the create-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Required expertise tag.
    pub expertise: String,
    /// Opaque patient reference.
    pub patient_id: i32,
}

impl CreateTaskRequest {
    /// Converts the inbound request into a service creation payload.
    #[must_use]
    pub fn into_create_request(self) -> CreateTask {
        let mut request = CreateTask::new(self.title, self.expertise, self.patient_id);
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        request
    }
}

/// Response of the create-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    /// Assigned id of the new task.
    pub id: i32,
}

/// Request for the update-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,
    /// Full task payload; `created_at` and `deleted_at` are never
    /// overwritten.
    pub task: TaskDto,
}

/// Response of the update-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskResponse {
    /// Id of the updated task.
    pub id: i32,
}

/// Request for the delete-task operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskRequest {
    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,
    /// Id of the task to soft delete.
    pub id: i32,
}

/// Response of the delete-task operation; intentionally empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTaskResponse {}

/// Request for the per-patient listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTasksByPatientRequest {
    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,
    /// Patient reference to filter by.
    pub patient_id: i32,
}

/// Response of the per-patient listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTasksByPatientResponse {
    /// All non-deleted tasks for the patient, in ascending id order.
    pub tasks: Vec<TaskDto>,
}
