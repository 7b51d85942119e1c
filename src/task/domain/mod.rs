//! Domain model for task management.
//!
//! The task domain holds the task entity, its enumerated classifications,
//! and its audit trail while keeping all infrastructure concerns outside of
//! the domain boundary.

mod audit;
mod classification;
mod error;
mod ids;
mod task;

pub use audit::AuditTrail;
pub use classification::{TaskCategory, TaskLifeCycleState, TaskPriority};
pub use error::{ParseTaskEnumError, TaskDomainError, TaskIdentityError};
pub use ids::{ActorId, TaskId};
pub use task::Task;
