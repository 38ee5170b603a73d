use super::{build_created, build_response, json_body};
use crate::error::ApiError;
use crate::store::Store;
use acquire_core::ConfigCreateRequest;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    store: &Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    list_configs(store.clone())
        .or(get_config(store.clone()))
        .or(create_config(store.clone()))
}

/// GET /config
///
/// List all configurations
#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    responses(
        (status = 200, description = "All configurations", body = dto::ConfigListDto),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn list_configs(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("config")
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|store: Arc<dyn Store>| async move {
            let resp = store
                .list_configs()
                .await
                .map(|config| dto::ConfigListDto { config })
                .map_err(ApiError::from);
            build_response(resp)
        })
        .boxed()
}

/// GET /config/:id
///
/// Fetch one configuration
///
/// Returns 404 if no configuration has this id
#[utoipa::path(
    get,
    path = "/config/{id}",
    tag = "config",
    params(("id" = i64, Path, description = "Configuration id")),
    responses(
        (status = 200, description = "The configuration", body = dto::ConfigDto),
        (status = 404, description = "Unknown id", body = acquire_core::error::ErrorBody),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn get_config(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("config" / i64)
        .and(warp::get())
        .and(warp::any().map(move || store.clone()))
        .and_then(|config_id: i64, store: Arc<dyn Store>| async move {
            let resp = match store.get_config(config_id).await {
                Ok(Some(config)) => Ok(dto::ConfigDto { config }),
                Ok(None) => Err(ApiError::not_found("Config", config_id)),
                Err(e) => Err(ApiError::from(e)),
            };
            build_response(resp)
        })
        .boxed()
}

/// POST /config
///
/// Create a configuration
///
/// Returns 201 with the inserted row, `created_at` defaults to now
#[utoipa::path(
    post,
    path = "/config",
    tag = "config",
    request_body = ConfigCreateRequest,
    responses(
        (status = 201, description = "The inserted row", body = dto::ConfigListDto),
        (status = 422, description = "Invalid body", body = acquire_core::error::ErrorBody),
        (status = 500, description = "Storage failure", body = acquire_core::error::ErrorBody)
    )
)]
pub fn create_config(
    store: Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("config")
        .and(warp::post())
        .and(json_body())
        .and(warp::any().map(move || store.clone()))
        .and_then(
            |mut body: ConfigCreateRequest, store: Arc<dyn Store>| async move {
                body.created_at = Some(body.created_at.unwrap_or_else(super::server_time));
                let resp = store
                    .create_config(body)
                    .await
                    .map(|config| dto::ConfigListDto { config })
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
    use acquire_core::ConfigRecord;
    use serde::{Deserialize, Serialize};
    use utoipa::ToSchema;

    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct ConfigListDto {
        pub config: Vec<ConfigRecord>,
    }

    #[derive(Debug, Serialize, Deserialize, ToSchema)]
    pub struct ConfigDto {
        pub config: ConfigRecord,
    }
}
