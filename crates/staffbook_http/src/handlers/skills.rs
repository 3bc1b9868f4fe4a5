//! Skills-variant handlers mounted at the root path.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staffbook_core::{
    EmployeeId, SkilledEmployeeDto, SkilledEmployeeService, SqliteSkilledEmployeeRepository,
};

type ServiceOf<'conn> = SkilledEmployeeService<SqliteSkilledEmployeeRepository<'conn>>;

fn service(conn: &mut rusqlite::Connection) -> ServiceOf<'_> {
    SkilledEmployeeService::new(SqliteSkilledEmployeeRepository::from_ready(conn))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SkilledEmployeeDto>, JsonRejection>,
) -> Result<(StatusCode, Json<SkilledEmployeeDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let created = state
        .store
        .run(move |conn| Ok(service(conn).create_employee(&dto)?))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Result<Json<SkilledEmployeeDto>, ApiError> {
    let Path(id) = id?;
    let employee = state
        .store
        .run(move |conn| Ok(service(conn).get_employee(id)?))
        .await?;
    Ok(Json(employee))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkilledEmployeeDto>>, ApiError> {
    let employees = state
        .store
        .run(|conn| Ok(service(conn).list_employees()?))
        .await?;
    Ok(Json(employees))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<SkilledEmployeeDto>, JsonRejection>,
) -> Result<Json<SkilledEmployeeDto>, ApiError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    dto.validate()?;

    let updated = state
        .store
        .run(move |conn| Ok(service(conn).update_employee(id, &dto)?))
        .await?;
    Ok(Json(updated))
}

/// Returns a plain-text confirmation naming the deleted identifier.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Result<String, ApiError> {
    let Path(id) = id?;
    state
        .store
        .run(move |conn| Ok(service(conn).delete_employee(id)?))
        .await?;
    Ok(format!("Employee with ID: {id} was deleted."))
}
