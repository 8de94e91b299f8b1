//! Models endpoint handler

use axum::extract::State;
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ModelsResponse};

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, ApiError> {
    debug!("Listing all models");

    let models = state
        .model_catalog
        .list()
        .await
        .inspect_err(|e| error!(error = %e, "Failed to list models"))
        .map_err(ApiError::from)?;

    Ok(Json(ModelsResponse::new(models)))
}
