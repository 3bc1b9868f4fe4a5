//! Directory-variant repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete over the `employees` table.
//! - Own the shared repository error type.
//!
//! # Invariants
//! - Identifiers come from `AUTOINCREMENT`; a supplied `Employee::id` is
//!   ignored on create and never reused after delete.
//! - Each operation is one SQL statement, so it is atomic on its own.
//! - `update_employee` overwrites every mutable column.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::schema::{ensure_connection_ready, RequiredTable};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_COLUMNS: &str = "id, name, email, department";

const REQUIRED_TABLES: &[RequiredTable] =
    &[("employees", &["id", "name", "email", "department"])];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by both employee variants.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// No row with the given identifier.
    NotFound(EmployeeId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Employee not found with ID: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for directory-variant employees.
pub trait EmployeeRepository {
    /// Inserts a new row and returns it with the assigned identifier.
    fn create_employee(&self, employee: &Employee) -> RepoResult<Employee>;
    /// Loads one row or fails with `RepoError::NotFound`.
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee>;
    /// Loads every row in ascending identifier order.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Overwrites all mutable fields of an existing row.
    fn update_employee(&self, id: EmployeeId, employee: &Employee) -> RepoResult<Employee>;
    /// Removes a row permanently.
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed directory repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Self::ensure_ready(conn)?;
        Ok(Self::from_ready(conn))
    }

    /// Checks the schema version and the tables/columns this repository reads.
    pub fn ensure_ready(conn: &Connection) -> RepoResult<()> {
        ensure_connection_ready(conn, REQUIRED_TABLES)
    }

    /// Wraps a connection that already passed [`Self::ensure_ready`].
    pub fn from_ready(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, employee: &Employee) -> RepoResult<Employee> {
        let stored = self.conn.query_row(
            &format!(
                "INSERT INTO employees (name, email, department)
                 VALUES (?1, ?2, ?3)
                 RETURNING {EMPLOYEE_COLUMNS};"
            ),
            params![
                employee.name.as_str(),
                employee.email.as_str(),
                employee.department.as_str(),
            ],
            parse_employee_row,
        )?;

        Ok(stored)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee> {
        self.conn
            .query_row(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1;"),
                [id],
                parse_employee_row,
            )
            .optional()?
            .ok_or(RepoError::NotFound(id))
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn update_employee(&self, id: EmployeeId, employee: &Employee) -> RepoResult<Employee> {
        self.conn
            .query_row(
                &format!(
                    "UPDATE employees
                     SET
                        name = ?2,
                        email = ?3,
                        department = ?4
                     WHERE id = ?1
                     RETURNING {EMPLOYEE_COLUMNS};"
                ),
                params![
                    id,
                    employee.name.as_str(),
                    employee.email.as_str(),
                    employee.department.as_str(),
                ],
                parse_employee_row,
            )
            .optional()?
            .ok_or(RepoError::NotFound(id))
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        email: row.get("email")?,
        department: row.get("department")?,
    })
}
