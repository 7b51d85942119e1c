//! Taskboard: work-item tracking for engineering activities.
//!
//! This crate manages task records for bugs, features, and maintenance work
//! through their lifecycle, enforcing field constraints, identity
//! assignment, and audit stamping on every mutation.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and identity
//! - **Adapters**: Concrete implementations of ports
//!
//! Transport adapters (HTTP routing, documentation) live outside this crate
//! and call into [`task::services::TaskManagementService`].
//!
//! # Modules
//!
//! - [`task`]: Task entity and the task management service
//! - [`settings`]: Runtime settings
//! - [`telemetry`]: Log subscriber installation

pub mod settings;
pub mod task;
pub mod telemetry;
