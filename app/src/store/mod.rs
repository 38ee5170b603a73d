use crate::error::DBError;
use acquire_core::{
    ColumnInfo, ConfigCreateRequest, ConfigRecord, DbClock, MeasurementCreateRequest,
    MeasurementRecord,
};
use async_trait::async_trait;
use std::collections::BTreeMap;

mod postgres;

#[cfg(test)]
pub mod mock;

pub use postgres::PgStore;

/// Table name to its columns, in declaration order
pub type DbSchema = BTreeMap<String, Vec<ColumnInfo>>;

/// Everything the routes need from the storage layer
///
/// Each call runs in its own session, writes are committed before returning.
/// Inserts bind the request as is, defaults are the caller's business.
#[async_trait]
pub trait Store: Send + Sync {
    async fn check_db(&self) -> Result<Option<DbClock>, DBError>;

    async fn db_schema(&self) -> Result<DbSchema, DBError>;

    async fn list_configs(&self) -> Result<Vec<ConfigRecord>, DBError>;

    async fn get_config(&self, config_id: i64) -> Result<Option<ConfigRecord>, DBError>;

    async fn create_config(&self, req: ConfigCreateRequest)
        -> Result<Vec<ConfigRecord>, DBError>;

    async fn list_measurements(&self) -> Result<Vec<MeasurementRecord>, DBError>;

    async fn get_measurement(
        &self,
        measurement_id: i64,
    ) -> Result<Option<MeasurementRecord>, DBError>;

    async fn measurements_by_config(
        &self,
        config_id: i64,
    ) -> Result<Vec<MeasurementRecord>, DBError>;

    async fn create_measurement(
        &self,
        req: MeasurementCreateRequest,
    ) -> Result<Vec<MeasurementRecord>, DBError>;
}
