//! In-memory adapters for task management.

mod actor;
mod task;

pub use actor::StaticActorProvider;
pub use task::InMemoryTaskRepository;
