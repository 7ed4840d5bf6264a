//! OpenAPI document for the employee endpoints

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_employees,
        handlers::get_employees_by_id,
        handlers::create_employee_with_department,
    ),
    components(schemas(
        EmployeeDto,
        DepartmentDto,
        CreateEmployeeRequest,
        CreateDepartmentRequest,
        Problem,
    )),
    tags((name = "employee", description = "Employee and department records"))
)]
pub struct ApiDoc;
