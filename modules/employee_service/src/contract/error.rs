//! Contract error types for employee service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use sea_orm::DbErr;

/// Employee service domain errors
#[derive(Debug, thiserror::Error)]
pub enum EmployeeError {
    /// A required request field is missing or blank
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// A department with the requested name already exists
    #[error("Department already exists: {name}")]
    DepartmentExists {
        /// Conflicting department name
        name: String,
    },

    /// The store handed back the zero sentinel instead of a generated id
    #[error("Department id error: store returned {id}")]
    InvalidDepartmentId {
        /// Identifier returned by the insert
        id: i32,
    },

    /// Store failure, carried unchanged
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EmployeeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
