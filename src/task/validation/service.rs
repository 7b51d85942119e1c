//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskValidator` port,
//! combining individual rules into a single validator.

use crate::task::{
    domain::Task,
    ports::validator::{FieldLimits, TaskValidator, ValidationResult},
    validation::{error::ValidationError, rules},
};

/// Default implementation of the task validator.
///
/// Applies every rule and collects all violations rather than stopping at
/// the first one.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::Task;
/// use taskboard::task::ports::TaskValidator;
/// use taskboard::task::validation::FieldConstraintValidator;
///
/// let validator = FieldConstraintValidator::new();
/// assert!(validator.validate(&Task::new("Fix login bug")).is_ok());
/// assert!(validator.validate(&Task::new("")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldConstraintValidator {
    limits: FieldLimits,
}

impl FieldConstraintValidator {
    /// Creates a validator with the standard field limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom field limits.
    #[must_use]
    pub const fn with_limits(limits: FieldLimits) -> Self {
        Self { limits }
    }

    /// Returns the field limits in use.
    #[must_use]
    pub const fn limits(&self) -> &FieldLimits {
        &self.limits
    }
}

impl TaskValidator for FieldConstraintValidator {
    fn validate(&self, task: &Task) -> ValidationResult<()> {
        let results = [
            rules::validate_subject(task, &self.limits),
            rules::validate_completion_rate(task),
            rules::validate_optional_fields(task, &self.limits),
        ];

        let errors: Vec<ValidationError> = results
            .into_iter()
            .filter_map(Result::err)
            .flat_map(|error| match error {
                ValidationError::Multiple(nested) => nested,
                single => vec![single],
            })
            .collect();

        ValidationError::multiple(errors).map_or(Ok(()), Err)
    }
}
