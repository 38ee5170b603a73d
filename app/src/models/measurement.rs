use acquire_core::{MeasurementCreateRequest, MeasurementRecord};
use chrono::NaiveDateTime;
use sqlx::PgConnection;

use crate::error::DBError;

#[derive(sqlx::FromRow, Debug)]
pub struct MeasurementDao {
    pub(crate) id: i32,
    pub(crate) snapshot_rgb_camera: Option<String>,
    pub(crate) snapshot_hsi_camera: Option<String>,
    pub(crate) acustic: Option<i32>,
    pub(crate) created_at: Option<NaiveDateTime>,
    pub(crate) config_id: Option<i32>,
}

impl From<MeasurementDao> for MeasurementRecord {
    fn from(val: MeasurementDao) -> Self {
        MeasurementRecord {
            id: val.id,
            snapshot_rgb_camera: val.snapshot_rgb_camera,
            snapshot_hsi_camera: val.snapshot_hsi_camera,
            acustic: val.acustic,
            created_at: val.created_at,
            config_id: val.config_id,
        }
    }
}

/// The foreign key on `config_id` is left to the database
pub async fn insert(
    conn: &mut PgConnection,
    req: &MeasurementCreateRequest,
) -> Result<Vec<MeasurementDao>, DBError> {
    Ok(sql_stmnt!(
        MeasurementDao,
        r#"INSERT INTO measurement (snapshot_rgb_camera, snapshot_hsi_camera, acustic, config_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *"#,
        req.snapshot_rgb_camera.as_deref(),
        req.snapshot_hsi_camera.as_deref(),
        req.acustic,
        req.config_id,
        req.created_at
    )
    .fetch_all(conn)
    .await?)
}

// READ measurement
pub async fn read(conn: &mut PgConnection) -> Result<Vec<MeasurementDao>, DBError> {
    Ok(
        sql_stmnt!(MeasurementDao, "SELECT * FROM measurement ORDER BY id ASC")
            .fetch_all(conn)
            .await?,
    )
}

pub async fn get(
    conn: &mut PgConnection,
    measurement_id: i64,
) -> Result<Option<MeasurementDao>, DBError> {
    Ok(sql_stmnt!(
        MeasurementDao,
        "SELECT * FROM measurement WHERE id = $1",
        measurement_id
    )
    .fetch_optional(conn)
    .await?)
}

pub async fn get_by_config(
    conn: &mut PgConnection,
    config_id: i64,
) -> Result<Vec<MeasurementDao>, DBError> {
    Ok(sql_stmnt!(
        MeasurementDao,
        "SELECT * FROM measurement WHERE config_id = $1 ORDER BY id ASC",
        config_id
    )
    .fetch_all(conn)
    .await?)
}
