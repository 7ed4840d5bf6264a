//! Domain service - business logic orchestration

use super::repository::{EmployeeReadRepository, EmployeeWriteStore, EmployeeWriteTransaction};
use super::validation::validate_new_employee;
use crate::contract::{Employee, EmployeeError, NewEmployee};
use std::sync::Arc;

/// Domain service for employee records
pub struct Service {
    reads: Arc<dyn EmployeeReadRepository>,
    writes: Arc<dyn EmployeeWriteStore>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        reads: Arc<dyn EmployeeReadRepository>,
        writes: Arc<dyn EmployeeWriteStore>,
    ) -> Self {
        Self { reads, writes }
    }

    // ===== Reads =====

    /// List every employee as a flat record
    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.reads.list_flat().await?;
        tracing::debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    /// Employees matching `id` with their department embedded.
    ///
    /// Returns a sequence rather than an optional record; an unknown id yields
    /// an empty vector.
    pub async fn get_employees_by_id(&self, id: i32) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.reads.find_by_id_with_department(id).await?;
        tracing::debug!(employee_id = id, count = employees.len(), "loaded employee by id");
        Ok(employees)
    }

    // ===== Writes =====

    /// Create an employee together with a brand-new department.
    ///
    /// Both rows are written in one transaction. Any failure after the
    /// transaction opens rolls it back and is returned unchanged; nothing is
    /// persisted unless both inserts succeed.
    pub async fn create_employee_with_department(
        &self,
        new_employee: NewEmployee,
    ) -> Result<i32, EmployeeError> {
        validate_new_employee(&new_employee)?;

        let txn = self.writes.begin().await?;

        let outcome = Self::write_employee_with_department(&*txn, &new_employee).await;

        match outcome {
            Ok(employee_id) => {
                txn.commit().await?;
                tracing::info!(
                    employee_id,
                    department = %new_employee.department.name,
                    "created employee with department"
                );
                Ok(employee_id)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(error = %rollback_err, "rollback failed");
                }
                tracing::debug!(
                    department = %new_employee.department.name,
                    error = %err,
                    "employee creation rolled back"
                );
                Err(err)
            }
        }
    }

    /// Statements of the create unit of work, all on the same transaction
    async fn write_employee_with_department(
        txn: &dyn EmployeeWriteTransaction,
        new_employee: &NewEmployee,
    ) -> Result<i32, EmployeeError> {
        let department = &new_employee.department;

        // Application-level uniqueness; concurrent creates of the same name can
        // both pass this check under read-committed isolation.
        if txn.department_exists(&department.name).await? {
            return Err(EmployeeError::DepartmentExists {
                name: department.name.clone(),
            });
        }

        let department_id = txn.insert_department(department).await?;
        if department_id == 0 {
            return Err(EmployeeError::InvalidDepartmentId { id: department_id });
        }

        let employee_id = txn
            .insert_employee(&new_employee.name, &new_employee.email, department_id)
            .await?;

        Ok(employee_id)
    }
}
