//! Error types for task domain construction and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The actor identifier is blank or too long.
    #[error("invalid actor identifier '{0}', expected 1 to 31 characters")]
    InvalidActorId(String),
}

/// Raised when code tries to give an already identified task a new id.
///
/// Identity is assigned exactly once by the task management service. Hitting
/// this error means a caller bug, so it is kept apart from validation
/// failures and must never be shown to users as something they can fix.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskIdentityError {
    /// The task already carries an identifier.
    #[error("task ID already set to {current}; refusing to reassign it to {attempted}")]
    AlreadyAssigned {
        /// Identifier the task keeps.
        current: TaskId,
        /// Identifier that was rejected.
        attempted: TaskId,
    },
}

/// Error returned while parsing a task classification from its name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct ParseTaskEnumError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseTaskEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
