//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity (persisted row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

/// Create / update employee payload
///
/// `id` is accepted (and may be `null`) so that clients can post back a
/// record they previously received, but it is never trusted: create assigns
/// a fresh id and update takes the id from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

impl EmployeePayload {
    pub fn new(name: impl Into<String>, role: impl Into<String>, salary: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
            salary,
        }
    }
}

impl Employee {
    /// Replace every mutable field with the payload's values, keeping `id`.
    pub fn apply(&mut self, payload: EmployeePayload) {
        self.name = payload.name;
        self.role = payload.role;
        self.salary = payload.salary;
    }
}
