//! Schema bootstrap for the task table.
//!
//! Runs once at process start, before the service accepts traffic. The
//! statements are additive: a fresh database gets the full table, while a
//! pre-existing table from an older deployment gains the soft-delete
//! columns without touching existing rows.

use super::repository::TaskPgPool;
use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use diesel::connection::SimpleConnection;

const CREATE_TASKS_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS tasks (\
 id SERIAL PRIMARY KEY,\
 complete BOOLEAN NOT NULL DEFAULT FALSE,\
 title VARCHAR(100) NOT NULL,\
 description VARCHAR(500) NOT NULL DEFAULT '',\
 expertise VARCHAR(100) NOT NULL,\
 patient_id INTEGER NOT NULL,\
 created_at TIMESTAMPTZ NOT NULL DEFAULT now(),\
 deleted_at TIMESTAMPTZ\
)";

// Upgrade path for tables created before soft deletion existed.
const ADD_SOFT_DELETE_COLUMNS_SQL: &str = "\
ALTER TABLE tasks \
ADD COLUMN IF NOT EXISTS created_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
ADD COLUMN IF NOT EXISTS deleted_at TIMESTAMPTZ";

/// Creates the task table if absent and additively migrates older schemas.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when a statement fails;
/// callers treat this as fatal to process startup.
pub async fn ensure_schema(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = owned_pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(CREATE_TASKS_TABLE_SQL)
            .map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(ADD_SOFT_DELETE_COLUMNS_SQL)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(())
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}
