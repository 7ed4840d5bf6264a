//! Storage layer - database entities and repositories
//!
//! Two access paths share this layer: `raw` holds hand-written SQL mapped into
//! row structs, `entity` holds the SeaORM model with its relations. Both accept
//! any connection or transaction handle.

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod raw;
pub mod repositories;

use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open a connection pool for the configured DSN
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.dsn.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);

    Database::connect(options).await
}
