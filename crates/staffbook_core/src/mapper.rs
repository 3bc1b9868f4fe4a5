//! Transfer mapping between external DTOs and persisted records.
//!
//! # Responsibility
//! - Copy fields between `*Dto` and record shapes for both variants.
//!
//! # Invariants
//! - Mapping is lossless and total: no field is derived, trimmed or dropped.
//! - Inbound mapping takes the identifier from the caller, never from the DTO,
//!   so a client cannot choose or change a row identifier.

use crate::model::employee::{Employee, EmployeeDto, EmployeeId};
use crate::model::skilled_employee::{SkilledEmployee, SkilledEmployeeDto, Skills, SkillsDto};

/// Maps a persisted employee to its external representation.
pub fn employee_to_external(employee: &Employee) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name.clone(),
        email: employee.email.clone(),
        department: employee.department.clone(),
    }
}

/// Maps a validated external representation to a persisted-shape record.
///
/// `id` is `None` for creation and the path identifier for updates.
pub fn employee_to_internal(dto: &EmployeeDto, id: Option<EmployeeId>) -> Employee {
    Employee {
        id,
        name: dto.name.clone(),
        email: dto.email.clone(),
        department: dto.department.clone(),
    }
}

/// Maps a persisted skilled employee, including owned skills.
pub fn skilled_to_external(employee: &SkilledEmployee) -> SkilledEmployeeDto {
    SkilledEmployeeDto {
        id: employee.id,
        name: employee.name.clone(),
        email: employee.email.clone(),
        skills: employee.skills.as_ref().map(|skills| SkillsDto {
            id: skills.id,
            skills: skills.description.clone(),
        }),
    }
}

/// Maps a validated skilled representation to a persisted-shape record.
///
/// The skills identifier is copied as given; the repository decides whether
/// an existing skills row is reused.
pub fn skilled_to_internal(dto: &SkilledEmployeeDto, id: Option<EmployeeId>) -> SkilledEmployee {
    SkilledEmployee {
        id,
        name: dto.name.clone(),
        email: dto.email.clone(),
        skills: dto.skills.as_ref().map(|skills| Skills {
            id: skills.id,
            description: skills.skills.clone(),
        }),
    }
}
