//! Employee Service Module
//!
//! Employee and department records over a relational store. Flat reads go
//! through hand-written SQL, relational reads and writes through SeaORM, and
//! the create operation runs both paths inside one explicit transaction.

// Public exports
pub mod contract;
pub use contract::{
    client::EmployeeApi, error::EmployeeError, Department, Employee, NewDepartment, NewEmployee,
};

pub mod module;
pub use module::EmployeeServiceModule;

pub mod config;
pub use config::{Config, DatabaseConfig};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
