//! Common test utilities: SQLite-backed module and request fixtures
#![allow(dead_code)]

use employee_service::infra::storage::entity::{department, employee};
use employee_service::{Config, DatabaseConfig, EmployeeServiceModule, NewDepartment, NewEmployee};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tempfile::TempDir;

/// Module running against a throwaway SQLite file
pub struct TestDb {
    pub module: EmployeeServiceModule,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

impl TestDb {
    /// Fresh database with the schema already created
    pub async fn new() -> Self {
        Self::with_max_connections(4).await
    }

    /// Fresh database whose pool holds at most `max_connections` connections
    pub async fn with_max_connections(max_connections: u32) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("employees.db");
        let config = Config {
            auto_migrate: true,
            database: DatabaseConfig {
                dsn: format!("sqlite://{}?mode=rwc", path.display()),
                max_connections,
                ..DatabaseConfig::default()
            },
        };

        let module = EmployeeServiceModule::init(&config)
            .await
            .expect("init employee module");

        Self { module, _dir: dir }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.module.connection()
    }

    /// (departments, employees) row counts
    pub async fn row_counts(&self) -> (u64, u64) {
        let departments = department::Entity::find()
            .count(self.db())
            .await
            .expect("count departments");
        let employees = employee::Entity::find()
            .count(self.db())
            .await
            .expect("count employees");
        (departments, employees)
    }
}

/// Create request with the given names
pub fn new_employee(name: &str, email: &str, department: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        email: email.to_string(),
        department: NewDepartment {
            name: department.to_string(),
            description: Some(format!("{} department", department)),
        },
    }
}

pub fn alice() -> NewEmployee {
    NewEmployee {
        name: "Alice".to_string(),
        email: "alice@x.com".to_string(),
        department: NewDepartment {
            name: "Eng".to_string(),
            description: Some("Engineering".to_string()),
        },
    }
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}
