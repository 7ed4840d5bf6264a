//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, EmployeeError};

// ===== Response conversions =====

impl From<contract::Employee> for EmployeeDto {
    fn from(employee: contract::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department_id: employee.department_id,
            department: employee.department.map(Into::into),
        }
    }
}

impl From<contract::Department> for DepartmentDto {
    fn from(department: contract::Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            description: department.description,
        }
    }
}

// ===== Request conversions =====

impl TryFrom<CreateEmployeeRequest> for contract::NewEmployee {
    type Error = EmployeeError;

    fn try_from(req: CreateEmployeeRequest) -> Result<Self, Self::Error> {
        let department = req.department.ok_or_else(|| missing("Department"))?;

        Ok(Self {
            name: req.name.ok_or_else(|| missing("Name"))?,
            email: req.email.ok_or_else(|| missing("Email"))?,
            department: contract::NewDepartment {
                name: department.name.ok_or_else(|| missing("Department.Name"))?,
                description: department.description,
            },
        })
    }
}

fn missing(field: &str) -> EmployeeError {
    EmployeeError::validation(format!("The {} field is required.", field))
}
