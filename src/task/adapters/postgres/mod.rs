//! `PostgreSQL` persistence adapter for the task registry.

mod bootstrap;
mod models;
mod repository;
mod schema;

pub use bootstrap::ensure_schema;
pub use repository::{PostgresTaskRepository, TaskPgPool, build_pool};

#[cfg(test)]
pub(crate) use models::TaskRow;
#[cfg(test)]
pub(crate) use repository::row_to_task;
