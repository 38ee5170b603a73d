use acquire_core::error::ErrorBody;
use thiserror::Error;
use warp::http::StatusCode;

#[derive(Debug, Error)]
pub enum DBError {
    #[error(transparent)]
    SQLError(#[from] sqlx::Error),
    #[error(transparent)]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed setting up logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Database(#[from] DBError),
    #[error("Failed binding the webserver: {0}")]
    Bind(#[from] warp::Error),
}

/// Every way a request can fail, as seen by a client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationFailed(String),
    #[error("{0}")]
    StorageFailure(String),
}

impl ApiError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ApiError::NotFound(format!("{} with id {} not found", entity, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.to_string())
    }
}

impl From<DBError> for ApiError {
    fn from(err: DBError) -> Self {
        ApiError::StorageFailure(err.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("Config", 999999);
        assert_eq!(StatusCode::NOT_FOUND, err.status());
        assert_eq!("Config with id 999999 not found", err.body().message);
        assert_eq!("error", err.body().status);
    }

    #[test]
    fn test_storage_failure_keeps_driver_text() {
        let sql_err = sqlx::Error::Protocol("connection reset by peer".to_owned());
        let expected = sql_err.to_string();

        let err = ApiError::from(DBError::from(sql_err));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status());
        assert_eq!(expected, err.body().message);
    }

    #[test]
    fn test_validation_status() {
        let err = ApiError::ValidationFailed("missing field `interval_value`".to_owned());
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, err.status());
    }
}
