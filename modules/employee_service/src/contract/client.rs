//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with employee service.
//! NO HTTP - direct function calls for performance.

use super::{
    error::EmployeeError,
    model::{Employee, NewEmployee},
};
use async_trait::async_trait;

/// Employee service API for inter-module communication
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// List every employee without resolving departments
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Employees matching `id` (zero or one) with their department resolved
    async fn get_employees_by_id(&self, id: i32) -> Result<Vec<Employee>, EmployeeError>;

    /// Create an employee and its department in one transaction, returning the employee id
    async fn create_employee_with_department(
        &self,
        new_employee: NewEmployee,
    ) -> Result<i32, EmployeeError>;
}
