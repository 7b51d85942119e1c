//! Runtime settings loaded from defaults and the environment.
//!
//! Every key can be overridden with a `TASKBOARD__` prefixed variable using
//! `__` as the section separator, e.g. `TASKBOARD__LOGGING__LEVEL=debug`.
//!
//! The crate itself never loads settings; embedding applications call
//! [`Settings::load`] at startup and pass the result to
//! [`crate::telemetry::init_tracing`] and [`Settings::actor_provider`].

use crate::task::{
    adapters::memory::StaticActorProvider,
    domain::{ActorId, TaskDomainError},
};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Environment variable prefix for setting overrides.
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Acting user configuration.
    pub actor: ActorSettings,
    /// Log output configuration.
    pub logging: LoggingSettings,
}

/// Fallback identity used when no identity layer supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActorSettings {
    /// User id stamped into audit trails.
    pub default_user_id: String,
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Settings {
    /// Loads settings from defaults and `TASKBOARD__*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Loads settings from defaults plus the given environment source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override cannot be parsed.
    pub fn from_builder(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("actor.default_user_id", "anonymous")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Builds the fallback actor provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidActorId`] when the configured user
    /// id is blank or too long.
    pub fn actor_provider(&self) -> Result<StaticActorProvider, TaskDomainError> {
        let actor = ActorId::new(self.actor.default_user_id.as_str())?;
        Ok(StaticActorProvider::new(actor))
    }
}
