//! In-memory adapters for the task board ports.

mod task;

pub use task::InMemoryTaskRepository;
