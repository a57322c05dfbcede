//! In-memory task repository for tests and local development.

mod task;

pub use task::InMemoryTaskRepository;
