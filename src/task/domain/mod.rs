//! Domain model for the task registry.
//!
//! The task domain models validated task field values, the task aggregate
//! with its soft-delete lifecycle, and pagination parameters, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod page;
mod task;

pub use error::TaskDomainError;
pub use fields::{Expertise, TaskDescription, TaskTitle};
pub use ids::{PatientId, TaskId};
pub use page::{IdPage, PageRequest};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskUpdate};
