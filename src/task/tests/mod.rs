//! Unit tests for task management.

mod support;
