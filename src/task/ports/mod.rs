//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod actor;
pub mod repository;
pub mod validator;

pub use actor::ActorProvider;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{FieldLimits, TaskValidator, ValidationResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
