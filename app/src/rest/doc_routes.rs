use super::{config_routes, db_routes, measurement_routes};
use acquire_core::error::ErrorBody;
use acquire_core::{
    ColumnInfo, ConfigCreateRequest, ConfigRecord, DbClock, MeasurementCreateRequest,
    MeasurementRecord,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::Config;
use warp::Filter;
use warp::{
    http::Uri,
    hyper::{Response, StatusCode},
    path::{FullPath, Tail},
    Rejection, Reply,
};

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        db_routes::check_db,
        db_routes::db_schema,
        config_routes::list_configs,
        config_routes::get_config,
        config_routes::create_config,
        measurement_routes::list_measurements,
        measurement_routes::get_measurement,
        measurement_routes::measurements_by_config,
        measurement_routes::measurements_by_config_alias,
        measurement_routes::create_measurement,
    ),
    components(schemas(
        ConfigRecord,
        ConfigCreateRequest,
        MeasurementRecord,
        MeasurementCreateRequest,
        ColumnInfo,
        DbClock,
        ErrorBody,
        db_routes::dto::CheckDbDto,
        db_routes::dto::DbSchemaDto,
        config_routes::dto::ConfigListDto,
        config_routes::dto::ConfigDto,
        measurement_routes::dto::MeasurementListDto,
        measurement_routes::dto::MeasurementDto,
        measurement_routes::dto::MeasurementsOfConfigDto,
    )),
    tags(
        (name = "db", description = "Connectivity and schema introspection"),
        (name = "config", description = "Acquisition configurations"),
        (name = "measurement", description = "Recorded measurements")
    )
)]
pub struct ApiDoc;

/// GET /openapi.json and the swagger ui below /docs
pub fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let api = ApiDoc::openapi();
    let config = Arc::new(Config::from(OPENAPI_PATH));

    warp::path!("openapi.json")
        .and(warp::get())
        .map(move || warp::reply::json(&api))
        .or(warp::path("docs")
            .and(warp::get())
            .and(warp::path::full())
            .and(warp::path::tail())
            .and(warp::any().map(move || config.clone()))
            .and_then(serve_swagger))
}

async fn serve_swagger(
    full_path: FullPath,
    tail: Tail,
    config: Arc<Config<'static>>,
) -> Result<Box<dyn Reply + 'static>, Rejection> {
    if full_path.as_str() == "/docs" {
        return Ok(Box::new(warp::redirect::found(Uri::from_static("/docs/"))));
    }

    let path = tail.as_str();
    match utoipa_swagger_ui::serve(path, config) {
        Ok(file) => {
            if let Some(file) = file {
                Ok(Box::new(
                    Response::builder()
                        .header("Content-Type", file.content_type)
                        .body(file.bytes),
                ))
            } else {
                Ok(Box::new(StatusCode::NOT_FOUND))
            }
        }
        Err(error) => Ok(Box::new(
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(error.to_string()),
        )),
    }
}
