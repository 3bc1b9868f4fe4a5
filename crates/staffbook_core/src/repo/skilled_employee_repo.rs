//! Skills-variant repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over `skilled_employees` together with owned `skills` rows.
//!
//! # Invariants
//! - An employee owns at most one skills row (`skills.employee_id` is unique).
//! - Create, update and delete run in one immediate transaction each; a
//!   failure leaves neither table changed.
//! - Delete removes the owned skills row explicitly before the owner.
//! - Update keeps the skills identifier when skills stay present and drops the
//!   skills row when the new record has none.

use crate::model::employee::EmployeeId;
use crate::model::skilled_employee::{SkilledEmployee, Skills};
use crate::repo::employee_repo::{RepoError, RepoResult};
use crate::repo::schema::{ensure_connection_ready, RequiredTable};
use rusqlite::{params, Connection, Row, TransactionBehavior};

const SKILLED_SELECT_SQL: &str = "SELECT
    e.id AS id,
    e.name AS name,
    e.email AS email,
    s.id AS skills_id,
    s.skills AS skills
FROM skilled_employees e
LEFT JOIN skills s ON s.employee_id = e.id";

const REQUIRED_TABLES: &[RequiredTable] = &[
    ("skilled_employees", &["id", "name", "email"]),
    ("skills", &["id", "employee_id", "skills"]),
];

/// Repository interface for skills-variant employees.
pub trait SkilledEmployeeRepository {
    /// Inserts the employee and its skills (if any) in one transaction.
    fn create_skilled_employee(&mut self, employee: &SkilledEmployee)
        -> RepoResult<SkilledEmployee>;
    /// Loads one employee with its skills or fails with `NotFound`.
    fn get_skilled_employee(&self, id: EmployeeId) -> RepoResult<SkilledEmployee>;
    /// Loads every employee in ascending identifier order.
    fn list_skilled_employees(&self) -> RepoResult<Vec<SkilledEmployee>>;
    /// Overwrites name, email and the owned skills record.
    fn update_skilled_employee(
        &mut self,
        id: EmployeeId,
        employee: &SkilledEmployee,
    ) -> RepoResult<SkilledEmployee>;
    /// Removes the employee and its owned skills.
    fn delete_skilled_employee(&mut self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed skills-variant repository.
pub struct SqliteSkilledEmployeeRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteSkilledEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        Self::ensure_ready(conn)?;
        Ok(Self::from_ready(conn))
    }

    /// Checks the schema version and both owned tables.
    pub fn ensure_ready(conn: &Connection) -> RepoResult<()> {
        ensure_connection_ready(conn, REQUIRED_TABLES)
    }

    /// Wraps a connection that already passed [`Self::ensure_ready`].
    pub fn from_ready(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl SkilledEmployeeRepository for SqliteSkilledEmployeeRepository<'_> {
    fn create_skilled_employee(
        &mut self,
        employee: &SkilledEmployee,
    ) -> RepoResult<SkilledEmployee> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let id: EmployeeId = tx.query_row(
            "INSERT INTO skilled_employees (name, email)
             VALUES (?1, ?2)
             RETURNING id;",
            params![employee.name.as_str(), employee.email.as_str()],
            |row| row.get(0),
        )?;

        if let Some(skills) = employee.skills.as_ref() {
            tx.execute(
                "INSERT INTO skills (employee_id, skills) VALUES (?1, ?2);",
                params![id, skills.description.as_str()],
            )?;
        }

        let stored = load_skilled_employee(&tx, id)?;
        tx.commit()?;
        Ok(stored)
    }

    fn get_skilled_employee(&self, id: EmployeeId) -> RepoResult<SkilledEmployee> {
        load_skilled_employee(self.conn, id)
    }

    fn list_skilled_employees(&self) -> RepoResult<Vec<SkilledEmployee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SKILLED_SELECT_SQL} ORDER BY e.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_skilled_row(row)?);
        }

        Ok(employees)
    }

    fn update_skilled_employee(
        &mut self,
        id: EmployeeId,
        employee: &SkilledEmployee,
    ) -> RepoResult<SkilledEmployee> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let changed = tx.execute(
            "UPDATE skilled_employees
             SET
                name = ?2,
                email = ?3
             WHERE id = ?1;",
            params![id, employee.name.as_str(), employee.email.as_str()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        match employee.skills.as_ref() {
            Some(skills) => {
                tx.execute(
                    "INSERT INTO skills (employee_id, skills)
                     VALUES (?1, ?2)
                     ON CONFLICT(employee_id) DO UPDATE SET skills = excluded.skills;",
                    params![id, skills.description.as_str()],
                )?;
            }
            None => {
                tx.execute("DELETE FROM skills WHERE employee_id = ?1;", [id])?;
            }
        }

        let stored = load_skilled_employee(&tx, id)?;
        tx.commit()?;
        Ok(stored)
    }

    fn delete_skilled_employee(&mut self, id: EmployeeId) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute("DELETE FROM skills WHERE employee_id = ?1;", [id])?;
        let changed = tx.execute("DELETE FROM skilled_employees WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

fn load_skilled_employee(conn: &Connection, id: EmployeeId) -> RepoResult<SkilledEmployee> {
    let mut stmt = conn.prepare(&format!("{SKILLED_SELECT_SQL} WHERE e.id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_skilled_row(row);
    }

    Err(RepoError::NotFound(id))
}

fn parse_skilled_row(row: &Row<'_>) -> RepoResult<SkilledEmployee> {
    let id: EmployeeId = row.get("id")?;
    let skills = match (
        row.get::<_, Option<i64>>("skills_id")?,
        row.get::<_, Option<String>>("skills")?,
    ) {
        (Some(skills_id), Some(description)) => Some(Skills {
            id: Some(skills_id),
            description,
        }),
        _ => None,
    };

    Ok(SkilledEmployee {
        id: Some(id),
        name: row.get("name")?,
        email: row.get("email")?,
        skills,
    })
}
