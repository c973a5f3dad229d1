//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Employee, EmployeePayload};

use crate::api::{AppJson, AppResult};
use crate::core::ServerState;

/// Body returned by a successful delete
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get(id).await?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.create(payload).await?;
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.update(id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<&'static str> {
    state.employees.delete(id).await?;
    Ok(DELETED_MESSAGE)
}
