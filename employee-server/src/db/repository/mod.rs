//! Repository Module
//!
//! Persistence gateway for SQLite tables. Each table gets a module of free
//! functions taking `&SqlitePool`; the [`EmployeeStore`] trait is the contract
//! the domain service depends on.

pub mod employee;

// Re-exports
pub use employee::SqliteEmployeeStore;

use async_trait::async_trait;
use shared::models::{Employee, EmployeePayload};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee persistence gateway, keyed by `id`
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert a new record and return it with its assigned id
    async fn insert(&self, data: EmployeePayload) -> RepoResult<Employee>;

    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Write `name`, `role` and `salary` of an existing record
    async fn save(&self, employee: &Employee) -> RepoResult<Employee>;

    /// Returns `false` when nothing was deleted
    async fn delete_by_id(&self, id: i64) -> RepoResult<bool>;
}
