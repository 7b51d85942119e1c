//! Field constraint violations reported for submitted tasks.

use thiserror::Error;

/// Errors that can occur while validating task data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The subject is empty.
    #[error("subject is required")]
    MissingSubject,

    /// A text field exceeds its maximum length.
    #[error("{field} has {actual} characters, exceeds limit of {max}")]
    FieldTooLong {
        /// Wire name of the offending field.
        field: &'static str,
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// The completion rate is outside `0..=100`.
    #[error("completion rate {0} is outside 0..=100")]
    CompletionRateOutOfRange(u8),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines collected validation errors into a single error.
    ///
    /// A single error is returned as is rather than wrapped. Returns `None`
    /// when nothing was collected.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Option<Self> {
        if errors.len() > 1 {
            return Some(Self::Multiple(errors));
        }
        errors.into_iter().next()
    }

    /// Returns the individual violations, flattening nested groups.
    #[must_use]
    pub fn violations(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(Self::violations).collect(),
            single => vec![single],
        }
    }
}
