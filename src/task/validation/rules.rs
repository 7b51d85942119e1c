//! Individual validation rule implementations.
//!
//! Each rule is a pure function checking one constraint of a task. Rules
//! return `Ok(())` on success or a specific `ValidationError` on failure.

use crate::task::{
    domain::Task,
    ports::validator::FieldLimits,
    validation::error::ValidationError,
};

/// Validates that the subject is present and short enough.
///
/// # Errors
///
/// Returns `ValidationError::MissingSubject` for an empty subject and
/// `ValidationError::FieldTooLong` when it exceeds the limit.
pub fn validate_subject(task: &Task, limits: &FieldLimits) -> Result<(), ValidationError> {
    if task.subject().is_empty() {
        return Err(ValidationError::MissingSubject);
    }
    validate_length("subject", Some(task.subject()), limits.subject)
}

/// Validates that the completion rate is a percentage.
///
/// # Errors
///
/// Returns `ValidationError::CompletionRateOutOfRange` above 100.
pub const fn validate_completion_rate(task: &Task) -> Result<(), ValidationError> {
    let rate = task.completion_rate();
    if rate > 100 {
        return Err(ValidationError::CompletionRateOutOfRange(rate));
    }
    Ok(())
}

/// Validates the optional, size-bounded text fields.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` (or the single error) for every field
/// that exceeds its limit.
pub fn validate_optional_fields(task: &Task, limits: &FieldLimits) -> Result<(), ValidationError> {
    let checks = [
        ("description", task.description(), limits.description),
        (
            "completedByUserId",
            task.completed_by_user_id(),
            limits.user_id,
        ),
        (
            "responsibleUserId",
            task.responsible_user_id(),
            limits.user_id,
        ),
        (
            "affectedProjectId",
            task.affected_project_id(),
            limits.linkage_id,
        ),
        (
            "affectedApplicationId",
            task.affected_application_id(),
            limits.linkage_id,
        ),
        ("affectedModule", task.affected_module(), limits.linkage_id),
        (
            "affectedResource",
            task.affected_resource(),
            limits.affected_resource,
        ),
    ];

    let errors: Vec<ValidationError> = checks
        .into_iter()
        .filter_map(|(field, value, max)| validate_length(field, value, max).err())
        .collect();

    ValidationError::multiple(errors).map_or(Ok(()), Err)
}

/// Validates that a text value has at most `max` characters.
///
/// Absent values always pass. Length counts Unicode scalar values.
///
/// # Errors
///
/// Returns `ValidationError::FieldTooLong` when the value is too long.
pub fn validate_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    let Some(text) = value else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, max, actual });
    }
    Ok(())
}
