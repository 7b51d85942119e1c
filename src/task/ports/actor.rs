//! Port for resolving the user on whose behalf an operation runs.

use crate::task::domain::ActorId;

/// Supplies the acting user for audit stamps.
///
/// Authentication happens in the external identity layer; implementations
/// only hand over the identity it established.
pub trait ActorProvider: Send + Sync {
    /// Returns the user performing the current operation.
    fn current_actor(&self) -> ActorId;
}
