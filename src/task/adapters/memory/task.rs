//! Thread-safe in-memory implementation of the task repository port.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{IdPage, PageRequest, PersistedTaskData, Task, TaskDraft, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Ids are assigned from a monotonic counter starting at 1 and timestamps
/// come from the injected clock, mirroring the column defaults of the
/// `PostgreSQL` adapter.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    state: Arc<RwLock<InMemoryTaskState>>,
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    next_id: i32,
    tasks: BTreeMap<TaskId, Task>,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty in-memory repository backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory repository with the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
        }
    }

    fn read_state(&self) -> TaskRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let created_at = self.clock.utc();
        let mut state = self.write_state()?;
        state.next_id += 1;
        let id = TaskId::from_i32(state.next_id);
        let task = Task::from_persisted(PersistedTaskData {
            id,
            complete: false,
            title: draft.title().clone(),
            description: draft.description().clone(),
            expertise: draft.expertise().clone(),
            patient_id: draft.patient_id(),
            created_at,
            deleted_at: None,
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        let task = state
            .tasks
            .get_mut(&update.id())
            .filter(|task| !task.is_deleted())
            .ok_or(TaskRepositoryError::NotFound(update.id()))?;
        task.apply(update);
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_ids(&self, page: PageRequest) -> TaskRepositoryResult<IdPage> {
        let state = self.read_state()?;
        let visible: Vec<TaskId> = state
            .tasks
            .values()
            .filter(|task| !task.is_deleted())
            .map(Task::id)
            .collect();
        let total = u64::try_from(visible.len()).unwrap_or_default();
        let offset = usize::try_from(page.offset()).unwrap_or_default();
        let limit = usize::try_from(page.limit()).unwrap_or_default();
        let ids = visible.into_iter().skip(offset).take(limit).collect();
        Ok(IdPage { ids, total })
    }

    async fn soft_delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let deleted_at = self.clock.utc();
        let mut state = self.write_state()?;
        let task = state
            .tasks
            .get_mut(&id)
            .filter(|task| !task.is_deleted())
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.mark_deleted(deleted_at);
        Ok(())
    }

    async fn find_by_patient(&self, patient_id: i32) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| !task.is_deleted() && task.patient_id().value() == patient_id)
            .cloned()
            .collect())
    }
}
