//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Writes go through an explicit transaction handle: [`EmployeeWriteStore::begin`]
//! opens one store transaction and every statement of the unit of work runs
//! against the returned [`EmployeeWriteTransaction`] until it is committed or
//! rolled back.

use crate::contract::{Employee, NewDepartment};
use async_trait::async_trait;
use sea_orm::DbErr;

/// Read access to employee records
#[async_trait]
pub trait EmployeeReadRepository: Send + Sync {
    /// All employees as flat rows, in store order, without departments
    async fn list_flat(&self) -> Result<Vec<Employee>, DbErr>;

    /// Employees whose id equals `id`, each with its department resolved
    async fn find_by_id_with_department(&self, id: i32) -> Result<Vec<Employee>, DbErr>;
}

/// Opens write transactions
#[async_trait]
pub trait EmployeeWriteStore: Send + Sync {
    /// Acquire a connection and begin a transaction on it
    async fn begin(&self) -> Result<Box<dyn EmployeeWriteTransaction>, DbErr>;
}

/// One open store transaction shared by every write statement of a request.
///
/// Dropping an unfinished transaction rolls it back and releases its connection.
#[async_trait]
pub trait EmployeeWriteTransaction: Send + Sync {
    /// Whether a department with exactly this name exists
    async fn department_exists(&self, name: &str) -> Result<bool, DbErr>;

    /// Insert a department and return the identifier the store generated for it
    async fn insert_department(&self, department: &NewDepartment) -> Result<i32, DbErr>;

    /// Stage and flush an employee row, returning its generated identifier
    async fn insert_employee(
        &self,
        name: &str,
        email: &str,
        department_id: i32,
    ) -> Result<i32, DbErr>;

    /// Commit and release the connection
    async fn commit(self: Box<Self>) -> Result<(), DbErr>;

    /// Roll back and release the connection
    async fn rollback(self: Box<Self>) -> Result<(), DbErr>;
}
