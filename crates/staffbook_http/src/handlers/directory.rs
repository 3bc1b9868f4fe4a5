//! Directory-variant handlers mounted under `/employees`.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staffbook_core::{EmployeeDto, EmployeeId, EmployeeService, SqliteEmployeeRepository};

type ServiceOf<'conn> = EmployeeService<SqliteEmployeeRepository<'conn>>;

fn service(conn: &rusqlite::Connection) -> ServiceOf<'_> {
    EmployeeService::new(SqliteEmployeeRepository::from_ready(conn))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeDto>), ApiError> {
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
) -> Result<Json<EmployeeDto>, ApiError> {
    let Path(id) = id?;
    let employee = state
        .store
        .run(move |conn| Ok(service(conn).get_employee(id)?))
        .await?;
    Ok(Json(employee))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    let employees = state
        .store
        .run(|conn| Ok(service(conn).list_employees()?))
        .await?;
    Ok(Json(employees))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<Json<EmployeeDto>, ApiError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    dto.validate()?;

    let updated = state
        .store
        .run(move |conn| Ok(service(conn).update_employee(id, &dto)?))
        .await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state
        .store
        .run(move |conn| Ok(service(conn).delete_employee(id)?))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
