//! Contract models for employee service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Department record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Store-generated identity
    pub id: i32,
    /// Department name, unique across departments
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Store-generated identity
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Owning department
    pub department_id: i32,
    /// Resolved department; only populated by the by-id read
    pub department: Option<Department>,
}

/// Department descriptor nested in a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
}

/// Create request for an employee together with a brand-new department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: NewDepartment,
}
