//! Service index served at `/`

use serde::Serialize;

use crate::api::router::{HEALTH_PATH, MODELS_PATH, TXT2IMG_PATH};
use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub models: &'static str,
    pub txt2img: &'static str,
    pub health: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "DreamLayer API is running!",
        endpoints: EndpointIndex {
            models: MODELS_PATH,
            txt2img: TXT2IMG_PATH,
            health: HEALTH_PATH,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_index() {
        let Json(response) = root().await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], "DreamLayer API is running!");
        assert_eq!(
            value["endpoints"],
            serde_json::json!({
                "models": "/api/models",
                "txt2img": "/api/txt2img",
                "health": "/health"
            })
        );
    }
}
