//! Enumerated classifications attached to every task.
//!
//! Each enumeration carries an explicit `Undefined` sentinel that is the
//! default. The sentinel is a valid value, not a marker for "unset".

use super::ParseTaskEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of engineering work a task represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskCategory {
    /// No category assigned.
    #[default]
    Undefined,
    /// Defect correction.
    Bugfix,
    /// Internal restructuring without behaviour change.
    Refactoring,
    /// New functionality.
    NewFeature,
    /// Speed or resource usage work.
    PerformanceImprovement,
    /// Release preparation and rollout.
    ReleaseManagement,
    /// Testing and review work.
    QualityAssurance,
    /// Broken build investigation.
    BuildFailure,
    /// Coordination with stakeholders.
    Communication,
}

impl TaskCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Undefined,
        Self::Bugfix,
        Self::Refactoring,
        Self::NewFeature,
        Self::PerformanceImprovement,
        Self::ReleaseManagement,
        Self::QualityAssurance,
        Self::BuildFailure,
        Self::Communication,
    ];

    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Bugfix => "BUGFIX",
            Self::Refactoring => "REFACTORING",
            Self::NewFeature => "NEW_FEATURE",
            Self::PerformanceImprovement => "PERFORMANCE_IMPROVEMENT",
            Self::ReleaseManagement => "RELEASE_MANAGEMENT",
            Self::QualityAssurance => "QUALITY_ASSURANCE",
            Self::BuildFailure => "BUILD_FAILURE",
            Self::Communication => "COMMUNICATION",
        }
    }
}

impl TryFrom<&str> for TaskCategory {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_by_name(&Self::ALL, Self::as_str, value)
            .ok_or_else(|| ParseTaskEnumError::new("task category", value))
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// No priority assigned.
    #[default]
    Undefined,
    /// Can wait.
    Low,
    /// Normal scheduling.
    Medium,
    /// Should be picked up soon.
    High,
    /// Blocks other work.
    Critical,
}

impl TaskPriority {
    /// All priorities in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Undefined,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
    ];

    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_by_name(&Self::ALL, Self::as_str, value)
            .ok_or_else(|| ParseTaskEnumError::new("task priority", value))
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress classification of a task.
///
/// No transition rules are attached; any value may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskLifeCycleState {
    /// No state assigned.
    #[default]
    Undefined,
    /// Suggested but not yet accepted.
    Proposed,
    /// Handed over for execution.
    Submitted,
    /// Work in progress.
    Running,
    /// Work paused.
    Suspended,
    /// Work finished.
    Completed,
    /// Work dropped.
    Cancelled,
}

impl TaskLifeCycleState {
    /// All lifecycle states in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Undefined,
        Self::Proposed,
        Self::Submitted,
        Self::Running,
        Self::Suspended,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Proposed => "PROPOSED",
            Self::Submitted => "SUBMITTED",
            Self::Running => "RUNNING",
            Self::Suspended => "SUSPENDED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl TryFrom<&str> for TaskLifeCycleState {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_by_name(&Self::ALL, Self::as_str, value)
            .ok_or_else(|| ParseTaskEnumError::new("task lifecycle state", value))
    }
}

impl fmt::Display for TaskLifeCycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact lookup of an enumeration value by its wire name, matching serde.
fn parse_by_name<T: Copy>(values: &[T], name_of: fn(T) -> &'static str, raw: &str) -> Option<T> {
    values.iter().copied().find(|value| name_of(*value) == raw)
}
