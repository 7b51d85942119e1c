//! Actor provider returning a fixed identity.

use crate::task::{domain::ActorId, ports::ActorProvider};

/// Actor provider that always reports the same user.
///
/// Suitable for single-user tooling, tests, and as the configured fallback
/// when no identity layer is wired in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticActorProvider {
    actor: ActorId,
}

impl StaticActorProvider {
    /// Creates a provider for the given actor.
    #[must_use]
    pub const fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl ActorProvider for StaticActorProvider {
    fn current_actor(&self) -> ActorId {
        self.actor.clone()
    }
}
