use super::{DbSchema, Store};
use crate::error::DBError;
use acquire_core::{
    ColumnInfo, ConfigCreateRequest, ConfigRecord, DbClock, MeasurementCreateRequest,
    MeasurementRecord,
};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

/// Keeps both tables in memory, enforcing the measurement -> config foreign key
#[derive(Default)]
pub struct MemoryStore {
    configs: Mutex<Vec<ConfigRecord>>,
    measurements: Mutex<Vec<MeasurementRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn check_db(&self) -> Result<Option<DbClock>, DBError> {
        Ok(Some(DbClock { now: Utc::now() }))
    }

    async fn db_schema(&self) -> Result<DbSchema, DBError> {
        let mut schema = DbSchema::new();
        schema.insert(
            "config".to_owned(),
            vec![
                ColumnInfo::new("id", "integer"),
                ColumnInfo::new("interval_value", "integer"),
                ColumnInfo::new("frequency", "double precision"),
                ColumnInfo::new("rgb_camera", "boolean"),
                ColumnInfo::new("hsi_camera", "boolean"),
                ColumnInfo::new("created_at", "timestamp without time zone"),
            ],
        );
        schema.insert(
            "measurement".to_owned(),
            vec![
                ColumnInfo::new("id", "integer"),
                ColumnInfo::new("snapshot_rgb_camera", "character varying"),
                ColumnInfo::new("snapshot_hsi_camera", "character varying"),
                ColumnInfo::new("acustic", "integer"),
                ColumnInfo::new("created_at", "timestamp without time zone"),
                ColumnInfo::new("config_id", "integer"),
            ],
        );
        Ok(schema)
    }

    async fn list_configs(&self) -> Result<Vec<ConfigRecord>, DBError> {
        Ok(self.configs.lock().clone())
    }

    async fn get_config(&self, config_id: i64) -> Result<Option<ConfigRecord>, DBError> {
        let configs = self.configs.lock();
        Ok(configs.iter().find(|c| i64::from(c.id) == config_id).cloned())
    }

    async fn create_config(&self, req: ConfigCreateRequest) -> Result<Vec<ConfigRecord>, DBError> {
        let mut configs = self.configs.lock();
        let record = ConfigRecord {
            id: configs.len() as i32 + 1,
            interval_value: Some(req.interval_value),
            frequency: req.frequency,
            rgb_camera: req.rgb_camera,
            hsi_camera: req.hsi_camera,
            created_at: req.created_at,
        };
        configs.push(record.clone());
        Ok(vec![record])
    }

    async fn list_measurements(&self) -> Result<Vec<MeasurementRecord>, DBError> {
        Ok(self.measurements.lock().clone())
    }

    async fn get_measurement(
        &self,
        measurement_id: i64,
    ) -> Result<Option<MeasurementRecord>, DBError> {
        let measurements = self.measurements.lock();
        Ok(measurements.iter().find(|m| i64::from(m.id) == measurement_id).cloned())
    }

    async fn measurements_by_config(
        &self,
        config_id: i64,
    ) -> Result<Vec<MeasurementRecord>, DBError> {
        let measurements = self.measurements.lock();
        Ok(measurements
            .iter()
            .filter(|m| m.config_id.map(i64::from) == Some(config_id))
            .cloned()
            .collect())
    }

    async fn create_measurement(
        &self,
        req: MeasurementCreateRequest,
    ) -> Result<Vec<MeasurementRecord>, DBError> {
        if let Some(config_id) = req.config_id {
            if !self.configs.lock().iter().any(|c| c.id == config_id) {
                return Err(DBError::SQLError(sqlx::Error::Protocol(format!(
                    "insert on table \"measurement\" violates foreign key constraint, config_id={}",
                    config_id
                ))));
            }
        }

        let mut measurements = self.measurements.lock();
        let record = MeasurementRecord {
            id: measurements.len() as i32 + 1,
            snapshot_rgb_camera: req.snapshot_rgb_camera,
            snapshot_hsi_camera: req.snapshot_hsi_camera,
            acustic: req.acustic,
            created_at: req.created_at,
            config_id: req.config_id,
        };
        measurements.push(record.clone());
        Ok(vec![record])
    }
}

/// Every session breaks with the same driver error
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        FailingStore {
            message: message.to_owned(),
        }
    }

    pub fn error(&self) -> DBError {
        DBError::SQLError(sqlx::Error::Protocol(self.message.clone()))
    }
}

#[async_trait]
impl Store for FailingStore {
    async fn check_db(&self) -> Result<Option<DbClock>, DBError> {
        Err(self.error())
    }

    async fn db_schema(&self) -> Result<DbSchema, DBError> {
        Err(self.error())
    }

    async fn list_configs(&self) -> Result<Vec<ConfigRecord>, DBError> {
        Err(self.error())
    }

    async fn get_config(&self, _config_id: i64) -> Result<Option<ConfigRecord>, DBError> {
        Err(self.error())
    }

    async fn create_config(
        &self,
        _req: ConfigCreateRequest,
    ) -> Result<Vec<ConfigRecord>, DBError> {
        Err(self.error())
    }

    async fn list_measurements(&self) -> Result<Vec<MeasurementRecord>, DBError> {
        Err(self.error())
    }

    async fn get_measurement(
        &self,
        _measurement_id: i64,
    ) -> Result<Option<MeasurementRecord>, DBError> {
        Err(self.error())
    }

    async fn measurements_by_config(
        &self,
        _config_id: i64,
    ) -> Result<Vec<MeasurementRecord>, DBError> {
        Err(self.error())
    }

    async fn create_measurement(
        &self,
        _req: MeasurementCreateRequest,
    ) -> Result<Vec<MeasurementRecord>, DBError> {
        Err(self.error())
    }
}
