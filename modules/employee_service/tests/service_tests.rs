//! Domain service tests against in-memory repositories

use employee_service::api::native::NativeClient;
use employee_service::contract::*;
use employee_service::domain::Service;
use sea_orm::DbErr;
use std::sync::Arc;

mod common;
use common::{alice, new_employee, print_test_header};

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use employee_service::domain::repository::{
        EmployeeReadRepository, EmployeeWriteStore, EmployeeWriteTransaction,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        departments: Vec<Department>,
        employees: Vec<Employee>,
        journal: Vec<String>,
    }

    /// In-memory store; staged rows become visible only on commit
    #[derive(Clone, Default)]
    pub struct MockStore {
        state: Arc<Mutex<State>>,
        department_id_override: Option<i32>,
        employee_insert_error: Option<String>,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every department insert report this id
        pub fn with_department_id(mut self, id: i32) -> Self {
            self.department_id_override = Some(id);
            self
        }

        /// Make every employee insert fail with a custom store error
        pub fn failing_employee_insert(mut self, message: &str) -> Self {
            self.employee_insert_error = Some(message.to_string());
            self
        }

        pub fn seed_department(&self, name: &str) -> i32 {
            let mut state = self.state.lock().unwrap();
            let id = state.departments.len() as i32 + 1;
            state.departments.push(Department {
                id,
                name: name.to_string(),
                description: None,
            });
            id
        }

        pub fn seed_employee(&self, name: &str, department_id: i32) -> i32 {
            let mut state = self.state.lock().unwrap();
            let id = state.employees.len() as i32 + 1;
            state.employees.push(Employee {
                id,
                name: name.to_string(),
                email: format!("{}@x.com", name.to_lowercase()),
                department_id,
                department: None,
            });
            id
        }

        pub fn journal(&self) -> Vec<String> {
            self.state.lock().unwrap().journal.clone()
        }

        pub fn counts(&self) -> (usize, usize) {
            let state = self.state.lock().unwrap();
            (state.departments.len(), state.employees.len())
        }

        pub fn employees(&self) -> Vec<Employee> {
            self.state.lock().unwrap().employees.clone()
        }

        pub fn departments(&self) -> Vec<Department> {
            self.state.lock().unwrap().departments.clone()
        }

        fn record(&self, entry: &str) {
            self.state.lock().unwrap().journal.push(entry.to_string());
        }
    }

    #[async_trait]
    impl EmployeeReadRepository for MockStore {
        async fn list_flat(&self) -> Result<Vec<Employee>, DbErr> {
            Ok(self.state.lock().unwrap().employees.clone())
        }

        async fn find_by_id_with_department(&self, id: i32) -> Result<Vec<Employee>, DbErr> {
            let state = self.state.lock().unwrap();
            Ok(state
                .employees
                .iter()
                .filter(|e| e.id == id)
                .map(|e| Employee {
                    department: state
                        .departments
                        .iter()
                        .find(|d| d.id == e.department_id)
                        .cloned(),
                    ..e.clone()
                })
                .collect())
        }
    }

    #[async_trait]
    impl EmployeeWriteStore for MockStore {
        async fn begin(&self) -> Result<Box<dyn EmployeeWriteTransaction>, DbErr> {
            self.record("begin");
            Ok(Box::new(MockTransaction {
                store: self.clone(),
                staged_departments: Mutex::new(Vec::new()),
                staged_employees: Mutex::new(Vec::new()),
            }))
        }
    }

    pub struct MockTransaction {
        store: MockStore,
        staged_departments: Mutex<Vec<Department>>,
        staged_employees: Mutex<Vec<Employee>>,
    }

    #[async_trait]
    impl EmployeeWriteTransaction for MockTransaction {
        async fn department_exists(&self, name: &str) -> Result<bool, DbErr> {
            self.store.record("department_exists");
            let committed = self.store.departments().iter().any(|d| d.name == name);
            let staged = self
                .staged_departments
                .lock()
                .unwrap()
                .iter()
                .any(|d| d.name == name);
            Ok(committed || staged)
        }

        async fn insert_department(&self, department: &NewDepartment) -> Result<i32, DbErr> {
            self.store.record("insert_department");
            let mut staged = self.staged_departments.lock().unwrap();
            let id = self
                .store
                .department_id_override
                .unwrap_or((self.store.counts().0 + staged.len() + 1) as i32);
            staged.push(Department {
                id,
                name: department.name.clone(),
                description: department.description.clone(),
            });
            Ok(id)
        }

        async fn insert_employee(
            &self,
            name: &str,
            email: &str,
            department_id: i32,
        ) -> Result<i32, DbErr> {
            self.store.record("insert_employee");
            if let Some(message) = &self.store.employee_insert_error {
                return Err(DbErr::Custom(message.clone()));
            }
            let mut staged = self.staged_employees.lock().unwrap();
            let id = (self.store.counts().1 + staged.len() + 1) as i32;
            staged.push(Employee {
                id,
                name: name.to_string(),
                email: email.to_string(),
                department_id,
                department: None,
            });
            Ok(id)
        }

        async fn commit(self: Box<Self>) -> Result<(), DbErr> {
            self.store.record("commit");
            let departments = std::mem::take(&mut *self.staged_departments.lock().unwrap());
            let employees = std::mem::take(&mut *self.staged_employees.lock().unwrap());
            let mut state = self.store.state.lock().unwrap();
            state.departments.extend(departments);
            state.employees.extend(employees);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), DbErr> {
            self.store.record("rollback");
            Ok(())
        }
    }
}

fn create_test_service() -> (Service, mocks::MockStore) {
    create_test_service_with_store(mocks::MockStore::new())
}

fn create_test_service_with_store(store: mocks::MockStore) -> (Service, mocks::MockStore) {
    let service = Service::new(Arc::new(store.clone()), Arc::new(store.clone()));
    (service, store)
}

#[tokio::test]
async fn test_create_commits_department_and_employee() {
    let (service, store) = create_test_service();

    print_test_header(
        "test_create_commits_department_and_employee",
        &["Verify that a valid request writes both rows in one committed transaction."],
    );

    println!("\n📝 Stage 1: Create Alice in Eng");
    let employee_id = service
        .create_employee_with_department(alice())
        .await
        .expect("create employee");

    assert!(employee_id > 0);
    assert_eq!(
        store.journal(),
        vec!["begin", "department_exists", "insert_department", "insert_employee", "commit"]
    );

    println!("\n📝 Stage 2: Verify committed rows");
    let departments = store.departments();
    let employees = store.employees();
    assert_eq!(departments.len(), 1);
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, employee_id);
    assert_eq!(employees[0].department_id, departments[0].id);
    assert_eq!(departments[0].description.as_deref(), Some("Engineering"));
}

#[tokio::test]
async fn test_duplicate_department_rolls_back() {
    let (service, store) = create_test_service();
    store.seed_department("Eng");

    print_test_header(
        "test_duplicate_department_rolls_back",
        &["Verify that an existing department name aborts the write before any insert."],
    );

    let err = service
        .create_employee_with_department(alice())
        .await
        .unwrap_err();

    assert!(matches!(err, EmployeeError::DepartmentExists { ref name } if name == "Eng"));
    assert_eq!(store.journal(), vec!["begin", "department_exists", "rollback"]);
    assert_eq!(store.counts(), (1, 0));
}

#[tokio::test]
async fn test_zero_department_id_rolls_back_before_employee_insert() {
    let (service, store) = create_test_service_with_store(mocks::MockStore::new().with_department_id(0));

    print_test_header(
        "test_zero_department_id_rolls_back_before_employee_insert",
        &["Verify that a sentinel id from the department insert never reaches the employee insert."],
    );

    let err = service
        .create_employee_with_department(alice())
        .await
        .unwrap_err();

    assert!(matches!(err, EmployeeError::InvalidDepartmentId { id: 0 }));
    assert_eq!(
        store.journal(),
        vec!["begin", "department_exists", "insert_department", "rollback"]
    );
    assert_eq!(store.counts(), (0, 0));
}

#[tokio::test]
async fn test_store_error_is_returned_unchanged() {
    let (service, store) = create_test_service_with_store(
        mocks::MockStore::new().failing_employee_insert("FOREIGN KEY constraint failed"),
    );

    print_test_header(
        "test_store_error_is_returned_unchanged",
        &["Verify that a driver error during the employee insert rolls back and surfaces as-is."],
    );

    let err = service
        .create_employee_with_department(alice())
        .await
        .unwrap_err();

    match err {
        EmployeeError::Database(DbErr::Custom(message)) => {
            assert_eq!(message, "FOREIGN KEY constraint failed")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.journal().last().map(String::as_str), Some("rollback"));
    assert!(!store.journal().iter().any(|entry| entry == "commit"));
    assert_eq!(store.counts(), (0, 0));
}

#[tokio::test]
async fn test_validation_failure_never_opens_transaction() {
    let (service, store) = create_test_service();

    print_test_header(
        "test_validation_failure_never_opens_transaction",
        &["Verify that blank required fields are rejected before touching the store."],
    );

    for request in [
        new_employee("", "alice@x.com", "Eng"),
        new_employee("Alice", "   ", "Eng"),
        new_employee("Alice", "alice@x.com", ""),
    ] {
        let err = service
            .create_employee_with_department(request)
            .await
            .unwrap_err();
        assert!(matches!(err, EmployeeError::Validation { .. }));
    }

    assert!(store.journal().is_empty());
}

#[tokio::test]
async fn test_second_department_with_same_name_is_rejected() {
    let (service, store) = create_test_service();

    service
        .create_employee_with_department(alice())
        .await
        .expect("first create");

    let err = service
        .create_employee_with_department(new_employee("Bob", "bob@x.com", "Eng"))
        .await
        .unwrap_err();

    assert!(matches!(err, EmployeeError::DepartmentExists { .. }));
    assert_eq!(store.counts(), (1, 1));
}

#[tokio::test]
async fn test_list_returns_flat_records() {
    let (service, store) = create_test_service();
    let eng = store.seed_department("Eng");
    store.seed_employee("Alice", eng);
    store.seed_employee("Bob", eng);
    store.seed_employee("Carol", eng);

    let employees = service.list_employees().await.expect("list employees");

    assert_eq!(employees.len(), 3);
    assert!(employees.iter().all(|e| e.department.is_none()));
}

#[tokio::test]
async fn test_get_by_id_returns_sequence() {
    let (service, store) = create_test_service();
    let eng = store.seed_department("Eng");
    let alice_id = store.seed_employee("Alice", eng);

    print_test_header(
        "test_get_by_id_returns_sequence",
        &[
            "Verify that the by-id read yields a sequence with the department embedded,",
            "and an empty sequence for an unknown id.",
        ],
    );

    let found = service.get_employees_by_id(alice_id).await.expect("get by id");
    assert_eq!(found.len(), 1);
    let department = found[0].department.as_ref().expect("department embedded");
    assert_eq!(department.id, eng);
    assert_eq!(department.name, "Eng");

    let missing = service.get_employees_by_id(9999).await.expect("get unknown id");
    assert!(missing.is_empty());
}

#[tokio::test]
async fn test_native_client_delegates_to_service() {
    let (service, store) = create_test_service();
    let client: Arc<dyn EmployeeApi> = Arc::new(NativeClient::new(Arc::new(service)));

    let employee_id = client
        .create_employee_with_department(alice())
        .await
        .expect("create through client");

    let listed = client.list_employees().await.expect("list through client");
    assert_eq!(listed.len(), 1);

    let found = client
        .get_employees_by_id(employee_id)
        .await
        .expect("get through client");
    assert_eq!(found[0].department.as_ref().map(|d| d.name.as_str()), Some("Eng"));
    assert_eq!(store.counts(), (1, 1));
}
