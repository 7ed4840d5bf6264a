//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::NewEmployee;
use crate::domain::Service;
use axum::{extract::Path, Json};
use std::sync::Arc;

/// List all employees without their departments
#[utoipa::path(
    get,
    path = "/api/employee",
    tag = "employee",
    responses(
        (status = 200, description = "Flat employee records", body = [EmployeeDto]),
        (status = 500, description = "Store failure", body = Problem)
    )
)]
pub async fn list_employees(service: Arc<Service>) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    let employees = service.list_employees().await.map_err(map_domain_error)?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Employees with the given id (zero or one) with their department embedded
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    tag = "employee",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Matching employees, empty when none", body = [EmployeeDto]),
        (status = 500, description = "Store failure", body = Problem)
    )
)]
pub async fn get_employees_by_id(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    let employees = service
        .get_employees_by_id(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Create an employee together with a new department
#[utoipa::path(
    post,
    path = "/api/employee",
    tag = "employee",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Id of the created employee", body = i32),
        (status = 400, description = "Missing required field", body = Problem),
        (status = 409, description = "Department name already taken", body = Problem),
        (status = 500, description = "Store failure", body = Problem)
    )
)]
pub async fn create_employee_with_department(
    service: Arc<Service>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<i32>, Problem> {
    let new_employee = NewEmployee::try_from(req).map_err(map_domain_error)?;

    let employee_id = service
        .create_employee_with_department(new_employee)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employee_id))
}
