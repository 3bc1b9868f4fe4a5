//! Core use-case services.
//!
//! # Responsibility
//! - Pair the transfer mapper with one repository call per operation.
//! - Keep HTTP/CLI layers decoupled from record shapes and SQL.

pub mod employee_service;
pub mod skilled_employee_service;
