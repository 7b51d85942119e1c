//! Task entity and its identity and audit rules.

use super::{
    ActorId, AuditTrail, TaskCategory, TaskId, TaskIdentityError, TaskLifeCycleState,
    TaskPriority,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Trackable unit of engineering work.
///
/// Equality and hashing only look at the identifier. A task without an
/// identifier is equal to nothing but itself.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::{Task, TaskCategory, TaskId, TaskPriority};
///
/// let mut task = Task::new("Fix login bug")
///     .with_category(TaskCategory::Bugfix)
///     .with_priority(TaskPriority::High);
/// assert!(task.id().is_none());
///
/// let id = TaskId::new();
/// assert!(task.assign_id(id).is_ok());
/// assert!(task.assign_id(TaskId::new()).is_err());
/// assert_eq!(task.id(), Some(id));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<TaskId>,
    #[serde(default)]
    subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    category: TaskCategory,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(default)]
    life_cycle_state: TaskLifeCycleState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    submitter_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    completion_rate: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_by_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responsible_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    affected_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    affected_application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    affected_module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    affected_resource: Option<String>,
    #[serde(default)]
    estimated_effort: u32,
    #[serde(default)]
    actual_effort: u32,
    #[serde(flatten)]
    audit: AuditTrail,
}

impl Task {
    /// Creates an unidentified task with the given subject and default
    /// classifications.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the lifecycle state.
    #[must_use]
    pub const fn with_life_cycle_state(mut self, state: TaskLifeCycleState) -> Self {
        self.life_cycle_state = state;
        self
    }

    /// Sets the completion rate in percent.
    #[must_use]
    pub const fn with_completion_rate(mut self, completion_rate: u8) -> Self {
        self.completion_rate = completion_rate;
        self
    }

    /// Returns the task identifier, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Assigns the task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIdentityError::AlreadyAssigned`] when the task already
    /// has an identifier. The existing identifier is kept.
    pub fn assign_id(&mut self, id: TaskId) -> Result<(), TaskIdentityError> {
        if let Some(current) = self.id {
            return Err(TaskIdentityError::AlreadyAssigned {
                current,
                attempted: id,
            });
        }
        self.id = Some(id);
        Ok(())
    }

    /// Returns the one-line summary.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Replaces the one-line summary.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    /// Returns the detailed description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces the detailed description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Replaces the category.
    pub const fn set_category(&mut self, category: TaskCategory) {
        self.category = category;
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Replaces the priority.
    pub const fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn life_cycle_state(&self) -> TaskLifeCycleState {
        self.life_cycle_state
    }

    /// Replaces the lifecycle state.
    pub const fn set_life_cycle_state(&mut self, state: TaskLifeCycleState) {
        self.life_cycle_state = state;
    }

    /// Returns when the task was submitted.
    #[must_use]
    pub const fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    /// Replaces the submission timestamp.
    pub const fn set_submitted_at(&mut self, submitted_at: Option<DateTime<Utc>>) {
        self.submitted_at = submitted_at;
    }

    /// Returns the user who submitted the task.
    #[must_use]
    pub fn submitter_user_id(&self) -> Option<&str> {
        self.submitter_user_id.as_deref()
    }

    /// Replaces the submitting user.
    pub fn set_submitter_user_id(&mut self, user_id: Option<String>) {
        self.submitter_user_id = user_id;
    }

    /// Returns the target completion date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Replaces the target completion date.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Returns the completion rate in percent.
    #[must_use]
    pub const fn completion_rate(&self) -> u8 {
        self.completion_rate
    }

    /// Replaces the completion rate in percent.
    pub const fn set_completion_rate(&mut self, completion_rate: u8) {
        self.completion_rate = completion_rate;
    }

    /// Returns when the task was completed.
    #[must_use]
    pub const fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    /// Replaces the completion timestamp.
    pub const fn set_completion_date(&mut self, completion_date: Option<DateTime<Utc>>) {
        self.completion_date = completion_date;
    }

    /// Returns the user who completed the task.
    #[must_use]
    pub fn completed_by_user_id(&self) -> Option<&str> {
        self.completed_by_user_id.as_deref()
    }

    /// Replaces the completing user.
    pub fn set_completed_by_user_id(&mut self, user_id: Option<String>) {
        self.completed_by_user_id = user_id;
    }

    /// Returns the user currently responsible for the task.
    #[must_use]
    pub fn responsible_user_id(&self) -> Option<&str> {
        self.responsible_user_id.as_deref()
    }

    /// Replaces the responsible user.
    pub fn set_responsible_user_id(&mut self, user_id: Option<String>) {
        self.responsible_user_id = user_id;
    }

    /// Returns the related project.
    #[must_use]
    pub fn affected_project_id(&self) -> Option<&str> {
        self.affected_project_id.as_deref()
    }

    /// Replaces the related project.
    pub fn set_affected_project_id(&mut self, project_id: Option<String>) {
        self.affected_project_id = project_id;
    }

    /// Returns the related application.
    #[must_use]
    pub fn affected_application_id(&self) -> Option<&str> {
        self.affected_application_id.as_deref()
    }

    /// Replaces the related application.
    pub fn set_affected_application_id(&mut self, application_id: Option<String>) {
        self.affected_application_id = application_id;
    }

    /// Returns the related logical module.
    #[must_use]
    pub fn affected_module(&self) -> Option<&str> {
        self.affected_module.as_deref()
    }

    /// Replaces the related logical module.
    pub fn set_affected_module(&mut self, module: Option<String>) {
        self.affected_module = module;
    }

    /// Returns the application resource the task refers to.
    #[must_use]
    pub fn affected_resource(&self) -> Option<&str> {
        self.affected_resource.as_deref()
    }

    /// Replaces the application resource the task refers to.
    pub fn set_affected_resource(&mut self, resource: Option<String>) {
        self.affected_resource = resource;
    }

    /// Returns the estimated effort in hours.
    #[must_use]
    pub const fn estimated_effort(&self) -> u32 {
        self.estimated_effort
    }

    /// Replaces the estimated effort in hours.
    pub const fn set_estimated_effort(&mut self, hours: u32) {
        self.estimated_effort = hours;
    }

    /// Returns the actual effort in hours.
    #[must_use]
    pub const fn actual_effort(&self) -> u32 {
        self.actual_effort
    }

    /// Replaces the actual effort in hours.
    pub const fn set_actual_effort(&mut self, hours: u32) {
        self.actual_effort = hours;
    }

    /// Returns the audit trail.
    #[must_use]
    pub const fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    /// Records the creation stamp; see [`AuditTrail::track_creation`].
    pub fn track_creation(&mut self, actor: &ActorId, at: DateTime<Utc>) {
        self.audit.track_creation(actor, at);
    }

    /// Records a modification stamp; see [`AuditTrail::track_modification`].
    pub fn track_modification(&mut self, actor: &ActorId, at: DateTime<Utc>) {
        self.audit.track_modification(actor, at);
    }

    /// Replaces the whole audit trail.
    ///
    /// Callers submitting task data never control the audit trail, so the
    /// management service resets it before stamping.
    pub(crate) fn replace_audit_trail(&mut self, audit: AuditTrail) {
        self.audit = audit;
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(left), Some(right)) => left == right,
            _ => std::ptr::eq(self, other),
        }
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Task {{ id : {id} }}"),
            None => f.write_str("Task { id : none }"),
        }
    }
}
