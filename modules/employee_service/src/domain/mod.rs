//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{EmployeeReadRepository, EmployeeWriteStore, EmployeeWriteTransaction};
pub use service::Service;
