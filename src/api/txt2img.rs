//! Text-to-image endpoint handler

use axum::extract::State;
use tracing::{error, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Txt2ImgResponse};
use crate::domain::{json_kind, Txt2ImgRequest};

/// POST /api/txt2img
pub async fn txt2img(
    State(state): State<AppState>,
    Json(request): Json<Txt2ImgRequest>,
) -> Result<Json<Txt2ImgResponse>, ApiError> {
    let prompt = request.prompt();
    info!(
        model = %request.model_name(),
        prompt_kind = json_kind(&prompt),
        "Text-to-image request"
    );

    let ticket = state
        .image_generator
        .submit(request)
        .await
        .inspect_err(|e| error!(error = %e, "Image generation failed"))
        .map_err(ApiError::from)?;

    Ok(Json(Txt2ImgResponse::new(ticket)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use super::*;
    use crate::config::AppConfig;
    use crate::domain::generation::MockImageGenerator;
    use crate::domain::{DomainError, StaticModelCatalog};

    #[tokio::test]
    async fn test_echoes_prompt_and_model() {
        let state = crate::create_app_state(&AppConfig::default());

        let Json(response) = txt2img(
            State(state),
            Json(Txt2ImgRequest::new("a cat", "custom-model")),
        )
        .await
        .unwrap();

        assert_eq!(response.data.prompt, "a cat");
        assert_eq!(response.data.model, "custom-model");
        assert_eq!(response.message, "Image generation endpoint is ready");
    }

    #[tokio::test]
    async fn test_generator_failure_becomes_error_envelope() {
        let mut generator = MockImageGenerator::new();
        generator
            .expect_submit()
            .times(1)
            .returning(|_| Err(DomainError::generation("backend offline")));

        let state = AppState::new(
            Arc::new(StaticModelCatalog::builtin()),
            Arc::new(generator),
            AppConfig::default().service,
        );

        let err = txt2img(State(state), Json(Txt2ImgRequest::default()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Generation error: backend offline");
    }
}
