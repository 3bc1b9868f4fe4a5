//! Employee domain model for both deployment variants.
//!
//! # Responsibility
//! - Define persisted records (`Employee`, `SkilledEmployee`, `Skills`).
//! - Define external transfer shapes (`*Dto`) and their boundary validation.
//!
//! # Invariants
//! - Identifiers are assigned by the record store, never by callers.
//! - Length/shape rules live on the transfer shapes only; persisted records
//!   are not re-validated.

pub mod employee;
pub mod skilled_employee;
pub mod validation;
