//! Entity to model mappers
//!
//! Conversions between SeaORM entities, raw rows and contract models

use super::entity::{department, employee};
use super::raw::EmployeeRow;
use crate::contract::{Department, Employee};

impl From<department::Model> for Department {
    fn from(entity: department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            department_id: row.department_id,
            department: None,
        }
    }
}

/// Employee joined with its (eagerly loaded) department
impl From<(employee::Model, Option<department::Model>)> for Employee {
    fn from((entity, department): (employee::Model, Option<department::Model>)) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            department_id: entity.department_id,
            department: department.map(Into::into),
        }
    }
}
