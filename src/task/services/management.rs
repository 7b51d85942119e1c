//! Service layer for task creation, retrieval, modification, and removal.

use crate::task::{
    domain::{AuditTrail, Task, TaskId, TaskIdentityError},
    ports::{ActorProvider, TaskRepository, TaskRepositoryError, TaskValidator},
    validation::{FieldConstraintValidator, ValidationError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Service-level errors for task management operations.
#[derive(Debug, Error)]
pub enum TaskManagementError {
    /// Submitted task data violates a field constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A modification was requested for a task without an identifier.
    #[error("task identifier is required for modification")]
    MissingTaskId,

    /// A modification referenced a task that does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A caller tried to reassign a task identity.
    #[error(transparent)]
    IllegalState(#[from] TaskIdentityError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Coarse classification of [`TaskManagementError`] for transport adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller can fix the request and resubmit it.
    Validation,
    /// The referenced task does not exist.
    NotFound,
    /// A programming error in the caller; not user-recoverable.
    IllegalState,
    /// Storage or other internal failure.
    Internal,
}

impl TaskManagementError {
    /// Classifies the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::task::services::{ErrorKind, TaskManagementError};
    ///
    /// assert_eq!(TaskManagementError::MissingTaskId.kind(), ErrorKind::Validation);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::MissingTaskId => ErrorKind::Validation,
            Self::TaskNotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::IllegalState(_) => ErrorKind::IllegalState,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for task management service operations.
pub type TaskManagementResult<T> = Result<T, TaskManagementError>;

/// Entry point for every task lifecycle operation.
///
/// Owns identity assignment and audit stamping; durable state lives in the
/// repository. The service holds no state between calls. Concurrent
/// modifications of the same task are last-writer-wins.
#[derive(Clone)]
pub struct TaskManagementService<R, A, C>
where
    R: TaskRepository,
    A: ActorProvider,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    actors: Arc<A>,
    clock: Arc<C>,
    validator: Arc<dyn TaskValidator>,
}

impl<R, A, C> TaskManagementService<R, A, C>
where
    R: TaskRepository,
    A: ActorProvider,
    C: Clock + Send + Sync,
{
    /// Creates a task management service using the standard field
    /// constraints.
    #[must_use]
    pub fn new(repository: Arc<R>, actors: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            repository,
            actors,
            clock,
            validator: Arc::new(FieldConstraintValidator::new()),
        }
    }

    /// Replaces the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn TaskValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagementError::Repository`] when the lookup fails.
    #[instrument(skip(self))]
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskManagementResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagementError::Repository`] when the lookup fails.
    #[instrument(skip(self))]
    pub async fn get_all_tasks(&self) -> TaskManagementResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Creates a task and returns its newly assigned identifier.
    ///
    /// Any audit data supplied by the caller is discarded; creation and
    /// modification are stamped with the acting user and the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagementError::Validation`] for invalid task data,
    /// [`TaskManagementError::IllegalState`] when the task already carries an
    /// identifier, and [`TaskManagementError::Repository`] when storing
    /// fails. Nothing is stored in any of these cases.
    #[instrument(skip_all, fields(subject = %task.subject()))]
    pub async fn add_task(&self, mut task: Task) -> TaskManagementResult<TaskId> {
        self.validate(&task)?;

        let id = TaskId::new();
        task.assign_id(id)?;

        let actor = self.actors.current_actor();
        task.replace_audit_trail(AuditTrail::empty());
        task.track_creation(&actor, self.clock.utc());

        self.repository.store(&task).await?;
        info!(task_id = %id, actor = %actor, "created task");
        Ok(id)
    }

    /// Replaces the state of an existing task.
    ///
    /// The stored creation stamp is kept and the modification stamp is
    /// refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagementError::MissingTaskId`] when the task has no
    /// identifier, [`TaskManagementError::Validation`] for invalid task data,
    /// [`TaskManagementError::TaskNotFound`] when no task with the identifier
    /// exists, and [`TaskManagementError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(task_id = tracing::field::Empty))]
    pub async fn modify_task(&self, mut task: Task) -> TaskManagementResult<()> {
        let id = task.id().ok_or(TaskManagementError::MissingTaskId)?;
        tracing::Span::current().record("task_id", tracing::field::display(id));
        self.validate(&task)?;

        let stored = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskManagementError::TaskNotFound(id))?;

        let actor = self.actors.current_actor();
        task.replace_audit_trail(stored.audit().clone());
        task.track_modification(&actor, self.clock.utc());

        self.repository.update(&task).await?;
        info!(task_id = %id, actor = %actor, "modified task");
        Ok(())
    }

    /// Removes a task.
    ///
    /// Removing an unknown identifier succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagementError::Repository`] when deletion fails.
    #[instrument(skip(self))]
    pub async fn remove_task(&self, id: TaskId) -> TaskManagementResult<()> {
        if self.repository.delete(id).await? {
            info!(task_id = %id, "removed task");
        } else {
            debug!(task_id = %id, "no task to remove");
        }
        Ok(())
    }

    fn validate(&self, task: &Task) -> TaskManagementResult<()> {
        self.validator.validate(task).map_err(|err| {
            warn!(error = %err, "rejected invalid task data");
            TaskManagementError::from(err)
        })
    }
}
