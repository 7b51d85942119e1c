//! Task management for engineering work items.
//!
//! This module tracks bugs, features, and maintenance work from creation to
//! completion. Tasks are created, retrieved, modified, and removed through
//! [`services::TaskManagementService`], which assigns identities, stamps
//! audit trails, and enforces field constraints. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field constraint rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
