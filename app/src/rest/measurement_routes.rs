use super::{build_created, build_response, json_body};
use crate::error::ApiError;
use crate::store::Store;
use acquire_core::MeasurementCreateRequest;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    store: &Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    list_measurements(store.clone())
        .or(get_measurement(store.clone()))
        .or(measurements_by_config(store.clone()))
        .or(measurements_by_config_alias(store.clone()))
        .or(create_measurement(store.clone()))
}

/// GET /measurements
///
/// List all measurements
#[utoipa::path(
    get,
    path = "/measurements",
    tag = "measurement",
    responses(
        (status = 200, description = "All measurements", body = dto::MeasurementListDto),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn list_measurements(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("measurements")
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|store: Arc<dyn Store>| async move {
            let resp = store
                .list_measurements()
                .await
                .map(|measurements| dto::MeasurementListDto { measurements })
                .map_err(ApiError::from);
            build_response(resp)
        })
        .boxed()
}

/// GET /measurement/:id
///
/// Fetch one measurement
///
/// Returns 404 if no measurement has this id
#[utoipa::path(
    get,
    path = "/measurement/{id}",
    tag = "measurement",
    params(("id" = i64, Path, description = "Measurement id")),
    responses(
        (status = 200, description = "The measurement", body = dto::MeasurementDto),
        (status = 404, description = "Unknown id", body = acquire_core::error::ErrorBody),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn get_measurement(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("measurement" / i64)
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|measurement_id: i64, store: Arc<dyn Store>| async move {
            let resp = match store.get_measurement(measurement_id).await {
                Ok(Some(measurement)) => Ok(dto::MeasurementDto { measurement }),
                Ok(None) => Err(ApiError::not_found("Measurement", measurement_id)),
                Err(e) => Err(ApiError::from(e)),
            };
            build_response(resp)
        })
        .boxed()
}

/// GET /measurement/config/:id
///
/// List the measurements recorded under a configuration
///
/// An unknown configuration yields an empty list, never a 404
#[utoipa::path(
    get,
    path = "/measurement/config/{id}",
    tag = "measurement",
    params(("id" = i64, Path, description = "Configuration id")),
    responses(
        (status = 200, description = "Measurements of the configuration", body = dto::MeasurementsOfConfigDto),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn measurements_by_config(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("measurement" / "config" / i64)
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|config_id: i64, store: Arc<dyn Store>| async move {
            by_config_response(store, config_id).await
        })
        .boxed()
}

/// GET /measurements/:config_id
///
/// Same as `GET /measurement/config/:id`
#[utoipa::path(
    get,
    path = "/measurements/{config_id}",
    tag = "measurement",
    params(("config_id" = i64, Path, description = "Configuration id")),
    responses(
        (status = 200, description = "Measurements of the configuration", body = dto::MeasurementsOfConfigDto),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn measurements_by_config_alias(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("measurements" / i64)
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|config_id: i64, store: Arc<dyn Store>| async move {
            by_config_response(store, config_id).await
        })
        .boxed()
}

async fn by_config_response(
    store: Arc<dyn Store>,
    config_id: i64,
) -> Result<warp::reply::Response, warp::Rejection> {
    let resp = store
        .measurements_by_config(config_id)
        .await
        .map(|measurement| dto::MeasurementsOfConfigDto { measurement })
        .map_err(ApiError::from);
    build_response(resp)
}

/// POST /measurements
///
/// Record a measurement
///
/// Returns 201 with the inserted row, `created_at` defaults to now.
/// A `config_id` without a matching configuration fails on the foreign key.
#[utoipa::path(
    post,
    path = "/measurements",
    tag = "measurement",
    request_body = MeasurementCreateRequest,
    responses(
        (status = 201, description = "The inserted row", body = dto::MeasurementsOfConfigDto),
        (status = 422, description = "Invalid body", body = acquire_core::error::ErrorBody),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn create_measurement(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("measurements")
        .and(warp::post())
        .and(json_body())
        .and(warp::any().map(move || store.clone()))
        .and_then(
            |mut body: MeasurementCreateRequest, store: Arc<dyn Store>| async move {
                body.created_at = Some(body.created_at.unwrap_or_else(super::server_time));
                let resp = store
                    .create_measurement(body)
                    .await
                    .map(|measurement| dto::MeasurementsOfConfigDto { measurement })
                    .map_err(ApiError::from);
                build_created(resp)
            },
        )
        .boxed()
}

///
/// DTO
///
pub mod dto {
    use acquire_core::MeasurementRecord;
    use serde::{Deserialize, Serialize};
    use utoipa::ToSchema;

    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct MeasurementListDto {
        pub measurements: Vec<MeasurementRecord>,
    }

    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct MeasurementDto {
        pub measurement: MeasurementRecord,
    }

    /// Rows keyed as `measurement`, used by the by-config lookup and by inserts
    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct MeasurementsOfConfigDto {
        pub measurement: Vec<MeasurementRecord>,
    }
}
