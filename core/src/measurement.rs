use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recorded sample, as stored in the `measurement` table
///
/// The snapshots are encoded image payloads and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasurementRecord {
    pub id: i32,
    pub snapshot_rgb_camera: Option<String>,
    pub snapshot_hsi_camera: Option<String>,
    pub acustic: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub config_id: Option<i32>,
}

/// Body of `POST /measurements`, every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MeasurementCreateRequest {
    pub snapshot_rgb_camera: Option<String>,
    pub snapshot_hsi_camera: Option<String>,
    pub acustic: Option<i32>,
    pub config_id: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_body_is_valid() {
        let req: MeasurementCreateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(MeasurementCreateRequest::default(), req);
    }

    #[test]
    fn test_explicit_null_created_at() {
        let req: MeasurementCreateRequest =
            serde_json::from_str(r#"{"config_id": 4, "created_at": null, "acustic": 17}"#).unwrap();
        assert_eq!(Some(4), req.config_id);
        assert_eq!(Some(17), req.acustic);
        assert_eq!(None, req.created_at);
    }

    #[test]
    fn test_created_at_accepts_iso_timestamp() {
        let req: MeasurementCreateRequest =
            serde_json::from_str(r#"{"created_at": "2025-04-24T10:20:33.270351"}"#).unwrap();
        let created_at = req.created_at.unwrap();
        assert_eq!("2025-04-24 10:20:33.270351", created_at.to_string());
    }
}
