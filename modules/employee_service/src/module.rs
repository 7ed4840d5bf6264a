//! Module wiring and lifecycle

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::EmployeeApi;
use crate::domain::Service;
use crate::infra::storage::{
    self,
    migrations::Migrator,
    repositories::{SeaOrmEmployeeReadRepository, SeaOrmEmployeeWriteStore},
};
use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Employee service module
pub struct EmployeeServiceModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl EmployeeServiceModule {
    /// Connect to the configured store, bootstrap the schema if enabled and
    /// build the service
    pub async fn init(config: &Config) -> Result<Self> {
        let db = storage::connect(&config.database)
            .await
            .context("failed to connect to the employee database")?;

        let module = Self::with_connection(db);
        if config.auto_migrate {
            module.migrate().await?;
        }

        tracing::info!("Employee service initialized");
        Ok(module)
    }

    /// Build the module on top of an existing connection pool
    pub fn with_connection(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);

        // Build repositories
        let reads = Arc::new(SeaOrmEmployeeReadRepository::new(db.clone()));
        let writes = Arc::new(SeaOrmEmployeeWriteStore::new(db.clone()));

        // Build domain service
        let service = Arc::new(Service::new(reads, writes));

        Self { db, service }
    }

    /// Create missing tables
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None)
            .await
            .context("employee service migrations failed")?;
        tracing::info!("Employee service migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn EmployeeApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Router carrying the employee REST endpoints
    pub fn router(&self) -> axum::Router {
        tracing::info!("Registering employee service REST routes");
        crate::api::rest::routes::register_routes(axum::Router::new(), self.service.clone())
    }
}
