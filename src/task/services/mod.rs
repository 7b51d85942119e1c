//! Application services for task management.

mod management;

pub use management::{
    ErrorKind, TaskManagementError, TaskManagementResult, TaskManagementService,
};
