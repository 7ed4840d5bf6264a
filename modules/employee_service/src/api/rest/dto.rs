//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Response DTOs =====

/// Employee response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Employee id
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Alice")]
    pub name: String,

    #[schema(example = "alice@x.com")]
    pub email: String,

    /// Owning department id
    pub department_id: i32,

    /// Embedded department, present only on the by-id endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentDto>,
}

/// Department response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i32,

    #[schema(example = "Eng")]
    pub name: String,

    #[schema(example = "Engineering")]
    pub description: Option<String>,
}

// ===== Request DTOs =====

/// Create employee request; every field is checked by the mapper so that a
/// missing one becomes a validation problem instead of a body rejection
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,

    #[schema(example = "alice@x.com")]
    pub email: Option<String>,

    /// Department created together with the employee
    pub department: Option<CreateDepartmentRequest>,
}

/// Nested department descriptor
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[schema(example = "Eng")]
    pub name: Option<String>,

    #[schema(example = "Engineering")]
    pub description: Option<String>,
}

// Note: Conversion implementations live in mapper.rs
