//! Task validation implementation.
//!
//! This module provides the field constraint rules applied to every task
//! submitted for creation or modification, and the validator combining them.

pub mod error;
pub mod rules;
pub mod service;

pub use error::ValidationError;
pub use service::FieldConstraintValidator;
