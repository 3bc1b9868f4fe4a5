//! Core domain logic for staffbook.
//!
//! Holds the employee records of both deployment variants (directory with a
//! department, skills with an owned skills record), their boundary
//! validation, the transfer mapper, the SQLite access layer and the
//! use-case services. HTTP and CLI crates only wire these together.

pub mod db;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeDto, EmployeeId};
pub use model::skilled_employee::{
    SkilledEmployee, SkilledEmployeeDto, Skills, SkillsDto, SkillsId,
};
pub use model::validation::{FieldViolation, ValidationErrors, ValidationResult};
pub use repo::{
    EmployeeRepository, RepoError, RepoResult, SkilledEmployeeRepository,
    SqliteEmployeeRepository, SqliteSkilledEmployeeRepository,
};
pub use service::employee_service::EmployeeService;
pub use service::skilled_employee_service::SkilledEmployeeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
