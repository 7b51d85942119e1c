//! Audit trail recorded on every task.

use super::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and last-modification stamps of a task.
///
/// The creation stamp is write-once. The modification stamp is replaced on
/// every tracked change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_by: Option<ActorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified_by: Option<ActorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified_at: Option<DateTime<Utc>>,
}

impl AuditTrail {
    /// Creates an empty audit trail.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            created_by: None,
            created_at: None,
            last_modified_by: None,
            last_modified_at: None,
        }
    }

    /// Returns the user who created the task.
    #[must_use]
    pub const fn created_by(&self) -> Option<&ActorId> {
        self.created_by.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the user who last modified the task.
    #[must_use]
    pub const fn last_modified_by(&self) -> Option<&ActorId> {
        self.last_modified_by.as_ref()
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modified_at
    }

    /// Records the creation stamp.
    ///
    /// Each field is only written while still unset, so repeated calls keep
    /// the first actor and timestamp. The modification stamp is seeded the
    /// same way.
    pub fn track_creation(&mut self, actor: &ActorId, at: DateTime<Utc>) {
        self.created_by.get_or_insert_with(|| actor.clone());
        self.created_at.get_or_insert(at);
        self.last_modified_by.get_or_insert_with(|| actor.clone());
        self.last_modified_at.get_or_insert(at);
    }

    /// Records a modification stamp, replacing the previous one.
    pub fn track_modification(&mut self, actor: &ActorId, at: DateTime<Utc>) {
        self.last_modified_by = Some(actor.clone());
        self.last_modified_at = Some(at);
    }
}
