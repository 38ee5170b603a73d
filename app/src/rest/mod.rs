use crate::error::{ApiError, StartupError};
use crate::store::Store;
use serde::Serialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

mod config_routes;
mod db_routes;
mod doc_routes;
mod measurement_routes;

/// Snapshots are encoded images, so bodies are allowed to be large
const BODY_LIMIT: u64 = 16 * 1024 * 1024;

/// All endpoints, including the API documentation, with rejections
/// rendered as `{"status": "error", "message": ...}`
pub fn routes(
    store: &Arc<dyn Store>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    db_routes::routes(store)
        .or(config_routes::routes(store))
        .or(measurement_routes::routes(store))
        .or(doc_routes::routes())
        .recover(handle_rejection)
        .with(warp::trace::request())
}

pub async fn dispatch_server(
    store: Arc<dyn Store>,
    bind_addr: SocketAddr,
) -> Result<(), StartupError> {
    let (addr, server) = warp::serve(routes(&store))
        .try_bind_with_graceful_shutdown(bind_addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed listening for shutdown signal: {}", e);
            }
        })?;

    info!("Starting webserver at: {}", addr);
    server.await;
    info!("Webserver stopped");
    Ok(())
}

/// Timestamp used when a request leaves `created_at` open
pub(crate) fn server_time() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub(crate) fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send,
{
    warp::body::content_length_limit(BODY_LIMIT).and(warp::body::json())
}

pub(crate) fn build_response<T: Serialize>(
    resp: Result<T, ApiError>,
) -> Result<warp::reply::Response, Rejection> {
    Ok(reply_with(resp, StatusCode::OK))
}

pub(crate) fn build_created<T: Serialize>(
    resp: Result<T, ApiError>,
) -> Result<warp::reply::Response, Rejection> {
    Ok(reply_with(resp, StatusCode::CREATED))
}

fn reply_with<T: Serialize>(resp: Result<T, ApiError>, status: StatusCode) -> warp::reply::Response {
    match resp {
        Ok(data) => warp::reply::with_status(warp::reply::json(&data), status).into_response(),
        Err(err) => error_reply(&err),
    }
}

fn error_reply(err: &ApiError) -> warp::reply::Response {
    match err {
        ApiError::StorageFailure(_) => error!("{}", err),
        ApiError::NotFound(_) | ApiError::ValidationFailed(_) => warn!("{}", err),
    }
    warp::reply::with_status(warp::reply::json(&err.body()), err.status()).into_response()
}

async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_owned())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(&ApiError::ValidationFailed(e.to_string())));
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_owned())
    } else if let Some(e) = err.find::<warp::reject::UnsupportedMediaType>() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string())
    } else if let Some(e) = err.find::<warp::reject::PayloadTooLarge>() {
        (StatusCode::PAYLOAD_TOO_LARGE, e.to_string())
    } else if let Some(e) = err.find::<warp::reject::LengthRequired>() {
        (StatusCode::LENGTH_REQUIRED, e.to_string())
    } else {
        error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_owned(),
        )
    };

    let body = acquire_core::error::ErrorBody::new(message);
    Ok(warp::reply::with_status(warp::reply::json(&body), status).into_response())
}
