//! Skills-variant use-case service.
//!
//! Same contract as the directory service; writes need `&mut self` because
//! the repository opens a transaction per call.

use crate::mapper::{skilled_to_external, skilled_to_internal};
use crate::model::employee::EmployeeId;
use crate::model::skilled_employee::SkilledEmployeeDto;
use crate::repo::employee_repo::RepoResult;
use crate::repo::skilled_employee_repo::SkilledEmployeeRepository;
use log::info;

/// Use-case facade over a skills-variant repository.
pub struct SkilledEmployeeService<R: SkilledEmployeeRepository> {
    repo: R,
}

impl<R: SkilledEmployeeRepository> SkilledEmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_employee(&mut self, dto: &SkilledEmployeeDto) -> RepoResult<SkilledEmployeeDto> {
        let stored = self
            .repo
            .create_skilled_employee(&skilled_to_internal(dto, None))?;
        info!(
            "event=employee_create module=service status=ok variant=skills id={} has_skills={}",
            stored.id.unwrap_or_default(),
            stored.skills.is_some()
        );
        Ok(skilled_to_external(&stored))
    }

    pub fn get_employee(&self, id: EmployeeId) -> RepoResult<SkilledEmployeeDto> {
        let employee = self.repo.get_skilled_employee(id)?;
        Ok(skilled_to_external(&employee))
    }

    pub fn list_employees(&self) -> RepoResult<Vec<SkilledEmployeeDto>> {
        let employees = self.repo.list_skilled_employees()?;
        Ok(employees.iter().map(skilled_to_external).collect())
    }

    /// Overwrites name, email and skills; `skills: None` drops owned skills.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        dto: &SkilledEmployeeDto,
    ) -> RepoResult<SkilledEmployeeDto> {
        let stored = self
            .repo
            .update_skilled_employee(id, &skilled_to_internal(dto, Some(id)))?;
        info!(
            "event=employee_update module=service status=ok variant=skills id={id} has_skills={}",
            stored.skills.is_some()
        );
        Ok(skilled_to_external(&stored))
    }

    pub fn delete_employee(&mut self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_skilled_employee(id)?;
        info!("event=employee_delete module=service status=ok variant=skills id={id}");
        Ok(())
    }
}
