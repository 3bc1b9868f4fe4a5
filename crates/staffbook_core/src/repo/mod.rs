//! Access layer: repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define CRUD contracts for both employee variants.
//! - Isolate SQL details from services and HTTP handlers.
//!
//! # Invariants
//! - Repositories receive an explicit connection at construction and refuse
//!   connections whose schema is not ready.
//! - Missing rows surface as `RepoError::NotFound`, never as `Ok(None)`.
//! - Every write is a single statement or a single transaction.

pub mod employee_repo;
mod schema;
pub mod skilled_employee_repo;

pub use employee_repo::{EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository};
pub use skilled_employee_repo::{SkilledEmployeeRepository, SqliteSkilledEmployeeRepository};
