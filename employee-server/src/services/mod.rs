//! 服务模块 - 业务逻辑层
//!
//! - [`EmployeeService`] - 员工增删改查

pub mod employee;

pub use employee::{EmployeeError, EmployeeResult, EmployeeService};
