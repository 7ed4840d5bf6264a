//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Employee, EmployeeApi, EmployeeError, NewEmployee};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EmployeeApi for NativeClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.service.list_employees().await
    }

    async fn get_employees_by_id(&self, id: i32) -> Result<Vec<Employee>, EmployeeError> {
        self.service.get_employees_by_id(id).await
    }

    async fn create_employee_with_department(
        &self,
        new_employee: NewEmployee,
    ) -> Result<i32, EmployeeError> {
        self.service.create_employee_with_department(new_employee).await
    }
}
