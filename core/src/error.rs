use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request
///
/// `status` is always `"error"`, `message` carries the human readable cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "error")]
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            status: crate::STATUS_ERROR.to_owned(),
            message: message.into(),
        }
    }
}
