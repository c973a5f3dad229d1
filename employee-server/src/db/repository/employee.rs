//! Employee Repository

use super::{EmployeeStore, RepoResult};
use async_trait::async_trait;
use shared::models::{Employee, EmployeePayload};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, salary FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, salary FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Insert a new employee; the id comes from the table, never from the payload
pub async fn create(pool: &SqlitePool, data: EmployeePayload) -> RepoResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employee (name, role, salary) VALUES (?1, ?2, ?3) RETURNING id, name, role, salary",
    )
    .bind(&data.name)
    .bind(&data.role)
    .bind(data.salary)
    .fetch_one(pool)
    .await?;
    Ok(employee)
}

/// Upsert by id
pub async fn save(pool: &SqlitePool, employee: &Employee) -> RepoResult<Employee> {
    let saved = sqlx::query_as::<_, Employee>(
        "INSERT INTO employee (id, name, role, salary) VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT(id) DO UPDATE SET name = excluded.name, role = excluded.role, salary = excluded.salary \
         RETURNING id, name, role, salary",
    )
    .bind(employee.id)
    .bind(&employee.name)
    .bind(&employee.role)
    .bind(employee.salary)
    .fetch_one(pool)
    .await?;
    Ok(saved)
}

/// Hard delete; `false` if the id did not exist
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows > 0)
}

/// [`EmployeeStore`] backed by a SQLite pool
#[derive(Clone, Debug)]
pub struct SqliteEmployeeStore {
    pool: SqlitePool,
}

impl SqliteEmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SqliteEmployeeStore {
    async fn insert(&self, data: EmployeePayload) -> RepoResult<Employee> {
        create(&self.pool, data).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        find_all(&self.pool).await
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        find_by_id(&self.pool, id).await
    }

    async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        save(&self.pool, employee).await
    }

    async fn delete_by_id(&self, id: i64) -> RepoResult<bool> {
        delete(&self.pool, id).await
    }
}
