//! Application services for the task registry.

mod registry;

pub use registry::{
    CreateTaskRequest, PERMISSION_DENIED_MESSAGE, TaskRegistryError, TaskRegistryResult,
    TaskRegistryService, UpdateTaskRequest,
};
