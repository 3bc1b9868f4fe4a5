//! Directory-variant use-case service.
//!
//! # Responsibility
//! - Accept and return external `EmployeeDto` values.
//! - Map through `mapper` and delegate each call to exactly one repository
//!   operation.
//!
//! # Invariants
//! - Callers validate DTOs before calling in; the service does not re-check.
//! - Repository errors are returned unchanged.

use crate::mapper::{employee_to_external, employee_to_internal};
use crate::model::employee::{EmployeeDto, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};
use log::info;

/// Use-case facade over a directory repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new employee; any `id` on the input is ignored.
    pub fn create_employee(&self, dto: &EmployeeDto) -> RepoResult<EmployeeDto> {
        let stored = self.repo.create_employee(&employee_to_internal(dto, None))?;
        info!(
            "event=employee_create module=service status=ok variant=directory id={}",
            stored.id.unwrap_or_default()
        );
        Ok(employee_to_external(&stored))
    }

    /// Gets one employee by identifier.
    pub fn get_employee(&self, id: EmployeeId) -> RepoResult<EmployeeDto> {
        let employee = self.repo.get_employee(id)?;
        Ok(employee_to_external(&employee))
    }

    /// Lists all employees in ascending identifier order.
    pub fn list_employees(&self) -> RepoResult<Vec<EmployeeDto>> {
        let employees = self.repo.list_employees()?;
        Ok(employees.iter().map(employee_to_external).collect())
    }

    /// Replaces every mutable field of an existing employee.
    pub fn update_employee(&self, id: EmployeeId, dto: &EmployeeDto) -> RepoResult<EmployeeDto> {
        let stored = self
            .repo
            .update_employee(id, &employee_to_internal(dto, Some(id)))?;
        info!("event=employee_update module=service status=ok variant=directory id={id}");
        Ok(employee_to_external(&stored))
    }

    /// Deletes an employee permanently.
    pub fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_employee(id)?;
        info!("event=employee_delete module=service status=ok variant=directory id={id}");
        Ok(())
    }
}
