//! Health check endpoint

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::types::Json;

use super::state::AppState;

/// Health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// GET /health
///
/// Returns 200 whenever the process is serving; headers and body are ignored.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        service: state.service.name.clone(),
        version: state.service.version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
    }

    #[tokio::test]
    async fn test_health_reports_service_identity() {
        let state = crate::create_app_state(&AppConfig::default());
        let Json(response) = health_check(State(state)).await;

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"service\":\"dreamlayer-backend\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
    }
}
