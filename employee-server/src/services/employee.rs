//! Employee domain service
//!
//! Sits between the HTTP handlers and the [`EmployeeStore`]. The only rule it
//! enforces: an update must target an existing record, it never creates one.

use std::sync::Arc;

use shared::models::{Employee, EmployeePayload};
use thiserror::Error;

use crate::db::repository::{EmployeeStore, RepoError};

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] RepoError),
}

pub type EmployeeResult<T> = Result<T, EmployeeError>;

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService").finish_non_exhaustive()
    }
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Every stored employee, in store order
    pub async fn list_all(&self) -> EmployeeResult<Vec<Employee>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> EmployeeResult<Employee> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))
    }

    pub async fn create(&self, payload: EmployeePayload) -> EmployeeResult<Employee> {
        let employee = self.store.insert(payload).await?;
        tracing::info!(id = employee.id, name = %employee.name, "Employee created");
        Ok(employee)
    }

    /// Replace name, role and salary of an existing employee
    ///
    /// Fails with [`EmployeeError::NotFound`] if `id` is unknown; nothing is
    /// written in that case.
    pub async fn update(&self, id: i64, payload: EmployeePayload) -> EmployeeResult<Employee> {
        let mut employee = self.get(id).await?;
        employee.apply(payload);
        let saved = self.store.save(&employee).await?;
        tracing::info!(id, "Employee updated");
        Ok(saved)
    }

    /// Remove an employee; deleting an unknown id is a no-op
    pub async fn delete(&self, id: i64) -> EmployeeResult<()> {
        if self.store.delete_by_id(id).await? {
            tracing::info!(id, "Employee deleted");
        } else {
            tracing::debug!(id, "Delete skipped, employee does not exist");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::{RepoResult, SqliteEmployeeStore};
    use async_trait::async_trait;

    async fn service() -> EmployeeService {
        let db = DbService::in_memory().await.unwrap();
        EmployeeService::new(Arc::new(SqliteEmployeeStore::new(db.pool)))
    }

    /// Gateway whose every call fails, as if the database were unreachable
    struct UnavailableStore;

    #[async_trait]
    impl EmployeeStore for UnavailableStore {
        async fn insert(&self, _data: EmployeePayload) -> RepoResult<Employee> {
            Err(RepoError::Database("unavailable".into()))
        }
        async fn find_all(&self) -> RepoResult<Vec<Employee>> {
            Err(RepoError::Database("unavailable".into()))
        }
        async fn find_by_id(&self, _id: i64) -> RepoResult<Option<Employee>> {
            Err(RepoError::Database("unavailable".into()))
        }
        async fn save(&self, _employee: &Employee) -> RepoResult<Employee> {
            Err(RepoError::Database("unavailable".into()))
        }
        async fn delete_by_id(&self, _id: i64) -> RepoResult<bool> {
            Err(RepoError::Database("unavailable".into()))
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let svc = service().await;
        let emp = svc
            .create(EmployeePayload::new("Kiran", "DevOps", 80000.0))
            .await
            .unwrap();
        assert_eq!(svc.list_all().await.unwrap(), vec![emp]);
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let svc = service().await;
        let a = svc.create(EmployeePayload::new("A", "Dev", 1.0)).await.unwrap();
        let b = svc.create(EmployeePayload::new("B", "Dev", 1.0)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_existing_is_idempotent() {
        let svc = service().await;
        let emp = svc
            .create(EmployeePayload::new("Kiran", "DevOps", 80000.0))
            .await
            .unwrap();

        let replacement = EmployeePayload::new("Kiran", "SRE", 95000.0);
        let first = svc.update(emp.id, replacement.clone()).await.unwrap();
        let second = svc.update(emp.id, replacement).await.unwrap();

        assert_eq!(first.id, emp.id);
        assert_eq!(first.role, "SRE");
        assert_eq!(first.salary, 95000.0);
        assert_eq!(first, second);
        assert_eq!(svc.get(emp.id).await.unwrap(), first);
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_fails_without_creating() {
        let svc = service().await;
        let existing = svc
            .create(EmployeePayload::new("Kiran", "DevOps", 80000.0))
            .await
            .unwrap();

        let err = svc
            .update(99, EmployeePayload::new("Ghost", "None", 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, EmployeeError::NotFound(99)));
        assert_eq!(svc.list_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let svc = service().await;
        let keep = svc.create(EmployeePayload::new("A", "Dev", 1.0)).await.unwrap();
        let gone = svc.create(EmployeePayload::new("B", "Ops", 2.0)).await.unwrap();

        svc.delete(gone.id).await.unwrap();
        assert_eq!(svc.list_all().await.unwrap(), vec![keep.clone()]);

        // Unknown id: still Ok, store untouched
        svc.delete(12345).await.unwrap();
        assert_eq!(svc.list_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let svc = service().await;
        assert!(matches!(svc.get(1).await, Err(EmployeeError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let svc = EmployeeService::new(Arc::new(UnavailableStore));
        assert!(matches!(svc.list_all().await, Err(EmployeeError::Store(_))));
        assert!(matches!(
            svc.create(EmployeePayload::new("A", "Dev", 1.0)).await,
            Err(EmployeeError::Store(_))
        ));
        assert!(matches!(
            svc.update(1, EmployeePayload::new("A", "Dev", 1.0)).await,
            Err(EmployeeError::Store(_))
        ));
        assert!(matches!(svc.delete(1).await, Err(EmployeeError::Store(_))));
    }
}
