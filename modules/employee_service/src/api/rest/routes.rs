//! Route registration

use super::{dto::*, error::Problem, handlers, openapi::ApiDoc};
use crate::domain::Service;
use axum::{
    extract::{rejection::JsonRejection, Path},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/api/employee",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route("/api/employee/{id}", get(get_employees_by_id_handler))
        .route("/api/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_employees_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    handlers::list_employees(service).await
}

async fn get_employees_by_id_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    handlers::get_employees_by_id(service, path).await
}

async fn create_employee_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<i32>, Problem> {
    let json = json.map_err(Problem::from)?;
    handlers::create_employee_with_department(service, json).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
