//! Validator port for task field constraints.

use crate::task::{domain::Task, validation::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for validating submitted task data.
///
/// Implementations should collect all violations before returning and
/// combine them with `ValidationError::multiple`. Invalid data is rejected,
/// never corrected.
pub trait TaskValidator: Send + Sync {
    /// Validates a task against all field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any constraint is violated.
    fn validate(&self, task: &Task) -> ValidationResult<()>;
}

/// Character limits applied to task text fields.
///
/// # Examples
///
/// ```
/// use taskboard::task::ports::validator::FieldLimits;
///
/// let limits = FieldLimits::default();
/// assert_eq!(limits.subject, 80);
/// assert_eq!(limits.affected_resource, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLimits {
    /// Maximum subject length.
    pub subject: usize,
    /// Maximum description length.
    pub description: usize,
    /// Maximum length of completer and responsible user ids.
    pub user_id: usize,
    /// Maximum length of project, application and module references.
    pub linkage_id: usize,
    /// Maximum length of the affected resource.
    pub affected_resource: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            subject: 80,
            description: 1024,
            user_id: 16,
            linkage_id: 32,
            affected_resource: 256,
        }
    }
}
