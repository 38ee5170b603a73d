use super::{DbSchema, Store};
use crate::error::DBError;
use crate::models::{
    catalog as catalog_model, config as config_model, measurement as measurement_model,
    SessionProvider,
};
use acquire_core::{
    ColumnInfo, ConfigCreateRequest, ConfigRecord, DbClock, MeasurementCreateRequest,
    MeasurementRecord,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub struct PgStore {
    sessions: SessionProvider,
}

impl Debug for PgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStore").finish()
    }
}

impl PgStore {
    pub fn new(sessions: SessionProvider) -> Self {
        PgStore { sessions }
    }
}

#[async_trait]
impl Store for PgStore {
    #[tracing::instrument]
    async fn check_db(&self) -> Result<Option<DbClock>, DBError> {
        let mut session = self.sessions.session().await?;
        let now = catalog_model::now(session.conn()).await?;
        Ok(now.map(DbClock::from))
    }

    #[tracing::instrument]
    async fn db_schema(&self) -> Result<DbSchema, DBError> {
        let mut session = self.sessions.session().await?;
        let tables = catalog_model::tables(session.conn()).await?;

        let mut schema = DbSchema::new();
        for table in tables {
            let columns = catalog_model::columns(session.conn(), &table.table_name).await?;
            schema.insert(
                table.table_name,
                columns.into_iter().map(ColumnInfo::from).collect(),
            );
        }
        Ok(schema)
    }

    #[tracing::instrument]
    async fn list_configs(&self) -> Result<Vec<ConfigRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let daos = config_model::read(session.conn()).await?;
        Ok(daos.into_iter().map(ConfigRecord::from).collect())
    }

    #[tracing::instrument]
    async fn get_config(&self, config_id: i64) -> Result<Option<ConfigRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let dao = config_model::get(session.conn(), config_id).await?;
        Ok(dao.map(ConfigRecord::from))
    }

    #[tracing::instrument]
    async fn create_config(&self, req: ConfigCreateRequest) -> Result<Vec<ConfigRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let daos = config_model::insert(session.conn(), &req).await?;
        session.commit().await?;
        Ok(daos.into_iter().map(ConfigRecord::from).collect())
    }

    #[tracing::instrument]
    async fn list_measurements(&self) -> Result<Vec<MeasurementRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let daos = measurement_model::read(session.conn()).await?;
        Ok(daos.into_iter().map(MeasurementRecord::from).collect())
    }

    #[tracing::instrument]
    async fn get_measurement(
        &self,
        measurement_id: i64,
    ) -> Result<Option<MeasurementRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let dao = measurement_model::get(session.conn(), measurement_id).await?;
        Ok(dao.map(MeasurementRecord::from))
    }

    #[tracing::instrument]
    async fn measurements_by_config(
        &self,
        config_id: i64,
    ) -> Result<Vec<MeasurementRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let daos = measurement_model::get_by_config(session.conn(), config_id).await?;
        Ok(daos.into_iter().map(MeasurementRecord::from).collect())
    }

    #[tracing::instrument(skip(req), fields(config_id = ?req.config_id))]
    async fn create_measurement(
        &self,
        req: MeasurementCreateRequest,
    ) -> Result<Vec<MeasurementRecord>, DBError> {
        let mut session = self.sessions.session().await?;
        let daos = measurement_model::insert(session.conn(), &req).await?;
        session.commit().await?;
        Ok(daos.into_iter().map(MeasurementRecord::from).collect())
    }
}
