use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A set of acquisition parameters, as stored in the `config` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigRecord {
    pub id: i32,
    pub interval_value: Option<i32>,
    pub frequency: Option<f64>,
    pub rgb_camera: Option<bool>,
    pub hsi_camera: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `POST /config`
///
/// `interval_value` is mandatory, everything else may be omitted.
/// A missing `created_at` is filled in with the server time on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigCreateRequest {
    #[schema(example = 1)]
    pub interval_value: i32,
    #[serde(default)]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub rgb_camera: Option<bool>,
    #[serde(default)]
    pub hsi_camera: Option<bool>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl ConfigCreateRequest {
    pub fn new(interval_value: i32) -> Self {
        ConfigCreateRequest {
            interval_value,
            frequency: None,
            rgb_camera: None,
            hsi_camera: None,
            created_at: None,
        }
    }
}
