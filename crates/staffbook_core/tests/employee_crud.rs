use staffbook_core::db::migrations::latest_version;
use staffbook_core::db::open_db_in_memory;
use staffbook_core::{
    Employee, EmployeeDto, EmployeeRepository, EmployeeService, RepoError,
    SqliteEmployeeRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

fn record(name: &str, email: &str, department: &str) -> Employee {
    Employee {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

#[test]
fn create_assigns_identifier_and_get_returns_same_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let created = repo
        .create_employee(&record("Ann", "ann@x.com", "Eng"))
        .unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(created.name, "Ann");

    let loaded = repo.get_employee(1).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_ignores_caller_supplied_identifier() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let mut input = record("Ann", "ann@x.com", "Eng");
    input.id = Some(42);
    let created = repo.create_employee(&input).unwrap();

    assert_eq!(created.id, Some(1));
    assert!(matches!(repo.get_employee(42), Err(RepoError::NotFound(42))));
}

#[test]
fn identifiers_are_never_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let mut seen = HashSet::new();
    for round in 0..3 {
        let created = repo
            .create_employee(&record("Ann", "ann@x.com", "Eng"))
            .unwrap();
        let id = created.id.unwrap();
        assert!(seen.insert(id), "id {id} reused in round {round}");
        repo.delete_employee(id).unwrap();
    }
}

#[test]
fn get_unknown_identifier_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let err = repo.get_employee(7).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(7)));
    assert_eq!(err.to_string(), "Employee not found with ID: 7");
}

#[test]
fn list_returns_rows_in_identifier_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    assert!(repo.list_employees().unwrap().is_empty());

    for name in ["Ann", "Bob", "Cid"] {
        repo.create_employee(&record(name, "x@x.com", "Eng")).unwrap();
    }

    let names: Vec<_> = repo
        .list_employees()
        .unwrap()
        .into_iter()
        .map(|employee| (employee.id.unwrap(), employee.name))
        .collect();
    assert_eq!(
        names,
        vec![(1, "Ann".to_string()), (2, "Bob".to_string()), (3, "Cid".to_string())]
    );
}

#[test]
fn update_overwrites_all_fields_and_keeps_identifier() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let other = repo
        .create_employee(&record("Bob", "bob@x.com", "Ops"))
        .unwrap();
    let created = repo
        .create_employee(&record("Ann", "ann@x.com", "Eng"))
        .unwrap();
    let id = created.id.unwrap();

    let updated = repo
        .update_employee(id, &record("Anna", "anna@y.org", "Research"))
        .unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Anna");
    assert_eq!(updated.email, "anna@y.org");
    assert_eq!(updated.department, "Research");

    assert_eq!(repo.get_employee(id).unwrap(), updated);
    assert_eq!(repo.get_employee(other.id.unwrap()).unwrap(), other);
}

#[test]
fn update_unknown_identifier_returns_not_found_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let err = repo
        .update_employee(5, &record("Ann", "ann@x.com", "Eng"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(5)));
    assert!(repo.list_employees().unwrap().is_empty());
}

#[test]
fn delete_then_get_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let id = repo
        .create_employee(&record("Ann", "ann@x.com", "Eng"))
        .unwrap()
        .id
        .unwrap();

    repo.delete_employee(id).unwrap();

    assert!(matches!(repo.get_employee(id), Err(RepoError::NotFound(_))));
    assert!(matches!(
        repo.delete_employee(id),
        Err(RepoError::NotFound(_))
    ));
}

#[test]
fn service_runs_full_lifecycle_scenario() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let created = service
        .create_employee(&EmployeeDto::new("Ann", "ann@x.com", "Eng"))
        .unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(
        (created.name.as_str(), created.email.as_str(), created.department.as_str()),
        ("Ann", "ann@x.com", "Eng")
    );

    assert_eq!(service.get_employee(1).unwrap(), created);
    assert_eq!(service.list_employees().unwrap(), vec![created.clone()]);

    let updated = service
        .update_employee(1, &EmployeeDto::new("Anna", "ann@x.com", "Eng"))
        .unwrap();
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, "Anna");

    service.delete_employee(1).unwrap();
    assert!(matches!(service.get_employee(1), Err(RepoError::NotFound(1))));
}

#[test]
fn service_update_ignores_identifier_in_payload() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());
    service
        .create_employee(&EmployeeDto::new("Ann", "ann@x.com", "Eng"))
        .unwrap();

    let mut payload = EmployeeDto::new("Anna", "ann@x.com", "Eng");
    payload.id = Some(99);
    let updated = service.update_employee(1, &payload).unwrap();

    assert_eq!(updated.id, Some(1));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteEmployeeRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_employees_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteEmployeeRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("employees"))
    ));
}

#[test]
fn repository_rejects_connection_missing_department_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteEmployeeRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "employees",
            column: "department"
        })
    ));
}
