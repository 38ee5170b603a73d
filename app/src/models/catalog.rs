use acquire_core::{ColumnInfo, DbClock};
use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use crate::error::DBError;

#[derive(sqlx::FromRow)]
pub struct NowDao {
    pub(crate) now: DateTime<Utc>,
}

impl From<NowDao> for DbClock {
    fn from(val: NowDao) -> Self {
        DbClock { now: val.now }
    }
}

#[derive(sqlx::FromRow)]
pub struct TableDao {
    pub(crate) table_name: String,
}

#[derive(sqlx::FromRow)]
pub struct ColumnDao {
    pub(crate) column_name: String,
    pub(crate) data_type: String,
}

impl From<ColumnDao> for ColumnInfo {
    fn from(val: ColumnDao) -> Self {
        ColumnInfo {
            name: val.column_name,
            data_type: val.data_type,
        }
    }
}

pub async fn now(conn: &mut PgConnection) -> Result<Option<NowDao>, DBError> {
    Ok(sql_stmnt!(NowDao, "SELECT NOW() AS now")
        .fetch_optional(conn)
        .await?)
}

/// Base tables of the public schema
///
/// The catalog views use their own domain types, hence the `::text` casts.
pub async fn tables(conn: &mut PgConnection) -> Result<Vec<TableDao>, DBError> {
    Ok(sql_stmnt!(
        TableDao,
        r#"SELECT table_name::text AS table_name
            FROM information_schema.tables
            WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
            ORDER BY table_name ASC"#
    )
    .fetch_all(conn)
    .await?)
}

pub async fn columns(conn: &mut PgConnection, table: &str) -> Result<Vec<ColumnDao>, DBError> {
    Ok(sql_stmnt!(
        ColumnDao,
        r#"SELECT column_name::text AS column_name, data_type::text AS data_type
            FROM information_schema.columns
            WHERE table_schema = 'public' AND table_name = $1
            ORDER BY ordinal_position ASC"#,
        table
    )
    .fetch_all(conn)
    .await?)
}
