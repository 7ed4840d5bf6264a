//! Hand-written SQL statements mapped into plain row structs
//!
//! Every function here is generic over [`ConnectionTrait`], so callers pass
//! either the pooled connection or an open [`sea_orm::DatabaseTransaction`].
//! Passing the transaction is how these statements join a unit of work that
//! the entity layer also writes to.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, Statement, Value};

/// Flat projection of an `employees` row
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department_id: i32,
}

#[derive(Debug, FromQueryResult)]
struct GeneratedId {
    id: i32,
}

/// Every employee row, in whatever order the store returns them
pub async fn select_employees<C>(conn: &C) -> Result<Vec<EmployeeRow>, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_string(
        conn.get_database_backend(),
        "SELECT id, name, email, department_id FROM employees",
    );
    EmployeeRow::find_by_statement(stmt).all(conn).await
}

/// Insert a department and read back its generated id in the same round trip
pub async fn insert_department_returning_id<C>(
    conn: &C,
    name: &str,
    description: Option<&str>,
) -> Result<i32, DbErr>
where
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    let sql = match backend {
        DbBackend::Postgres => {
            "INSERT INTO departments (name, description) VALUES ($1, $2) RETURNING id"
        }
        DbBackend::Sqlite => {
            "INSERT INTO departments (name, description) VALUES (?, ?) RETURNING id"
        }
        other => {
            return Err(DbErr::Custom(format!(
                "INSERT ... RETURNING is not available on {:?}",
                other
            )))
        }
    };
    let values: [Value; 2] = [name.into(), description.map(str::to_owned).into()];

    let row = GeneratedId::find_by_statement(Statement::from_sql_and_values(backend, sql, values))
        .one(conn)
        .await?
        .ok_or(DbErr::RecordNotInserted)?;

    Ok(row.id)
}
