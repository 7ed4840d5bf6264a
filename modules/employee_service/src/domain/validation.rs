//! Request validation for employee creation

use crate::contract::{EmployeeError, NewEmployee};

/// Validate a create request before any store interaction
///
/// Employee name, employee email and department name are required and must
/// not be blank. The department description is optional.
pub fn validate_new_employee(new_employee: &NewEmployee) -> Result<(), EmployeeError> {
    require("Name", &new_employee.name)?;
    require("Email", &new_employee.email)?;
    require("Department.Name", &new_employee.department.name)?;
    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), EmployeeError> {
    if value.trim().is_empty() {
        return Err(EmployeeError::validation(format!(
            "The {} field is required.",
            field
        )));
    }
    Ok(())
}
