//! `PostgreSQL` repository implementation for the task registry.

use super::{models::{NewTaskRow, TaskRow}, schema::tasks};
use crate::task::{
    domain::{
        Expertise, IdPage, PageRequest, PatientId, PersistedTaskData, Task, TaskDescription,
        TaskDraft, TaskId, TaskTitle, TaskUpdate,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
/// constructed.
pub fn build_pool(database_url: &str) -> TaskRepositoryResult<TaskPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<diesel::result::Error> for TaskRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow::from_draft(draft);
        self.run_blocking(move |connection| {
            let row = connection.transaction::<TaskRow, TaskRepositoryError, _>(|tx| {
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .returning(TaskRow::as_returning())
                    .get_result(tx)
                    .map_err(TaskRepositoryError::persistence)
            })?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<()> {
        let id = update.id();
        let complete = update.complete();
        let title = update.title().as_str().to_owned();
        let description = update.description().as_str().to_owned();
        let expertise = update.expertise().as_str().to_owned();
        let patient_id = update.patient_id().value();

        self.run_blocking(move |connection| {
            connection.transaction::<(), TaskRepositoryError, _>(|tx| {
                let affected = diesel::update(
                    tasks::table
                        .filter(tasks::id.eq(id.value()))
                        .filter(tasks::deleted_at.is_null()),
                )
                .set((
                    tasks::complete.eq(complete),
                    tasks::title.eq(&title),
                    tasks::description.eq(&description),
                    tasks::expertise.eq(&expertise),
                    tasks::patient_id.eq(patient_id),
                ))
                .execute(tx)
                .map_err(TaskRepositoryError::persistence)?;

                if affected == 0 {
                    return Err(TaskRepositoryError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            // Deliberately no deleted_at filter: by-id lookup must return
            // soft-deleted records.
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_ids(&self, page: PageRequest) -> TaskRepositoryResult<IdPage> {
        self.run_blocking(move |connection| {
            let ids: Vec<i32> = tasks::table
                .filter(tasks::deleted_at.is_null())
                .select(tasks::id)
                .order(tasks::id.asc())
                .offset(i64::from(page.offset()))
                .limit(i64::from(page.limit()))
                .load(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let total: i64 = tasks::table
                .filter(tasks::deleted_at.is_null())
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;

            Ok(IdPage {
                ids: ids.into_iter().map(TaskId::from_i32).collect(),
                total: u64::try_from(total).unwrap_or_default(),
            })
        })
        .await
    }

    async fn soft_delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.value()))
                    .filter(tasks::deleted_at.is_null()),
            )
            .set(tasks::deleted_at.eq(Some(Utc::now())))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_patient(&self, patient_id: i32) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::patient_id.eq(patient_id))
                .filter(tasks::deleted_at.is_null())
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

/// Reconstructs a domain task from a stored row.
///
/// Stored values are revalidated on the way out; a row violating the field
/// constraints indicates out-of-band writes and surfaces as a persistence
/// error.
pub(crate) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::persistence)?;
    let description =
        TaskDescription::new(row.description).map_err(TaskRepositoryError::persistence)?;
    let expertise = Expertise::new(row.expertise).map_err(TaskRepositoryError::persistence)?;
    let patient_id = PatientId::new(row.patient_id).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_i32(row.id),
        complete: row.complete,
        title,
        description,
        expertise,
        patient_id,
        created_at: row.created_at,
        deleted_at: row.deleted_at,
    }))
}
