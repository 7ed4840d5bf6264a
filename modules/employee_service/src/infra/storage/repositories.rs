//! SeaORM repository implementations
//!
//! Reads use the pooled connection directly. Writes open a
//! [`DatabaseTransaction`] and hand that same handle to the raw SQL statements
//! in [`super::raw`] and to the entity layer.

use crate::contract::{Employee, NewDepartment};
use crate::domain::repository::{
    EmployeeReadRepository, EmployeeWriteStore, EmployeeWriteTransaction,
};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{department, employee};
use super::raw;

// ===== Read Repository =====

pub struct SeaOrmEmployeeReadRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeReadRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeReadRepository for SeaOrmEmployeeReadRepository {
    async fn list_flat(&self) -> Result<Vec<Employee>, DbErr> {
        let rows = raw::select_employees(&*self.db).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id_with_department(&self, id: i32) -> Result<Vec<Employee>, DbErr> {
        let results = employee::Entity::find()
            .filter(employee::Column::Id.eq(id))
            .find_also_related(department::Entity)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

// ===== Write Store =====

pub struct SeaOrmEmployeeWriteStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeWriteStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeWriteStore for SeaOrmEmployeeWriteStore {
    async fn begin(&self) -> Result<Box<dyn EmployeeWriteTransaction>, DbErr> {
        let txn = self.db.begin().await?;
        Ok(Box::new(SeaOrmEmployeeWriteTransaction { txn }))
    }
}

/// Open transaction; rolled back by `DatabaseTransaction`'s drop if never finished
pub struct SeaOrmEmployeeWriteTransaction {
    txn: DatabaseTransaction,
}

#[async_trait]
impl EmployeeWriteTransaction for SeaOrmEmployeeWriteTransaction {
    async fn department_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = department::Entity::find()
            .filter(department::Column::Name.eq(name))
            .count(&self.txn)
            .await?;

        Ok(count > 0)
    }

    async fn insert_department(&self, department: &NewDepartment) -> Result<i32, DbErr> {
        raw::insert_department_returning_id(
            &self.txn,
            &department.name,
            department.description.as_deref(),
        )
        .await
    }

    async fn insert_employee(
        &self,
        name: &str,
        email: &str,
        department_id: i32,
    ) -> Result<i32, DbErr> {
        let active = employee::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            department_id: Set(department_id),
            ..Default::default()
        };

        let inserted = active.insert(&self.txn).await?;
        Ok(inserted.id)
    }

    async fn commit(self: Box<Self>) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}
