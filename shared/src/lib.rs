//! Shared types for the employee service
//!
//! Data models used by the server and by anything talking to its HTTP API.

pub mod models;

// Re-exports
pub use models::{Employee, EmployeePayload};
pub use serde::{Deserialize, Serialize};
