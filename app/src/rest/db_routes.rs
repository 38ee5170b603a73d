use super::build_response;
use crate::error::ApiError;
use crate::store::Store;
use acquire_core::STATUS_OK;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    store: &Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    check_db(store.clone()).or(db_schema(store.clone()))
}

/// GET /check-db
///
/// Connectivity probe, asks the database for its clock
#[utoipa::path(
    get,
    path = "/check-db",
    tag = "db",
    responses(
        (status = 200, description = "Database reachable", body = dto::CheckDbDto),
        (status = 500, description = "Database unreachable", body = acquire_core::error::ErrorBody)
    )
)]
pub fn check_db(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("check-db")
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|store: Arc<dyn Store>| async move {
            let resp = store
                .check_db()
                .await
                .map(|result| dto::CheckDbDto {
                    status: STATUS_OK.to_owned(),
                    result,
                })
                .map_err(ApiError::from);
            build_response(resp)
        })
        .boxed()
}

/// GET /db-schema
///
/// Lists every table of the public schema together with its columns
///
/// A failure on any of the catalog queries fails the whole request.
#[utoipa::path(
    get,
    path = "/db-schema",
    tag = "db",
    responses(
        (status = 200, description = "Table name to columns", body = dto::DbSchemaDto),
        (status = 500, description = "Catalog query failed", body = acquire_core::error::ErrorBody)
    )
)]
pub fn db_schema(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("db-schema")
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|store: Arc<dyn Store>| async move {
            let resp = store
                .db_schema()
                .await
                .map(|schema| dto::DbSchemaDto {
                    status: STATUS_OK.to_owned(),
                    schema,
                })
                .map_err(ApiError::from);
            build_response(resp)
        })
        .boxed()
}

///
/// DTO
///
pub mod dto {
    use acquire_core::{ColumnInfo, DbClock};
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;
    use utoipa::ToSchema;

    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct CheckDbDto {
        #[schema(example = "ok")]
        pub status: String,
        pub result: Option<DbClock>,
    }

    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct DbSchemaDto {
        #[schema(example = "ok")]
        pub status: String,
        pub schema: BTreeMap<String, Vec<ColumnInfo>>,
    }
}
