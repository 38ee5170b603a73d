use acquire_core::{ConfigCreateRequest, ConfigRecord};
use chrono::NaiveDateTime;
use sqlx::PgConnection;

use crate::error::DBError;

#[derive(sqlx::FromRow, Debug)]
pub struct ConfigDao {
    pub(crate) id: i32,
    pub(crate) interval_value: Option<i32>,
    pub(crate) frequency: Option<f64>,
    pub(crate) rgb_camera: Option<bool>,
    pub(crate) hsi_camera: Option<bool>,
    pub(crate) created_at: Option<NaiveDateTime>,
}

impl From<ConfigDao> for ConfigRecord {
    fn from(val: ConfigDao) -> Self {
        ConfigRecord {
            id: val.id,
            interval_value: val.interval_value,
            frequency: val.frequency,
            rgb_camera: val.rgb_camera,
            hsi_camera: val.hsi_camera,
            created_at: val.created_at,
        }
    }
}

pub async fn insert(
    conn: &mut PgConnection,
    req: &ConfigCreateRequest,
) -> Result<Vec<ConfigDao>, DBError> {
    Ok(sql_stmnt!(
        ConfigDao,
        r#"INSERT INTO config (interval_value, frequency, rgb_camera, hsi_camera, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *"#,
        req.interval_value,
        req.frequency,
        req.rgb_camera,
        req.hsi_camera,
        req.created_at
    )
    .fetch_all(conn)
    .await?)
}

/// READ config
pub async fn read(conn: &mut PgConnection) -> Result<Vec<ConfigDao>, DBError> {
    Ok(sql_stmnt!(ConfigDao, "SELECT * FROM config ORDER BY id ASC")
        .fetch_all(conn)
        .await?)
}

pub async fn get(conn: &mut PgConnection, config_id: i64) -> Result<Option<ConfigDao>, DBError> {
    Ok(
        sql_stmnt!(ConfigDao, "SELECT * FROM config WHERE id = $1", config_id)
            .fetch_optional(conn)
            .await?,
    )
}
