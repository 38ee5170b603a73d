use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database clock as reported by `GET /check-db`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DbClock {
    pub now: DateTime<Utc>,
}

/// Column descriptor reported by `GET /db-schema`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColumnInfo {
    #[schema(example = "interval_value")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "integer")]
    pub data_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        ColumnInfo {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}
