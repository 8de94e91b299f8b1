//! DreamLayer API
//!
//! A minimal image generation backend exposing:
//! - A service index and health check
//! - The catalog of available generation models
//! - A text-to-image endpoint (placeholder, no generation pipeline)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::generation::PlaceholderGenerator;
use domain::model::StaticModelCatalog;

/// Create the application state with the built-in catalog and generator
pub fn create_app_state(config: &AppConfig) -> AppState {
    AppState {
        model_catalog: Arc::new(StaticModelCatalog::builtin()),
        image_generator: Arc::new(PlaceholderGenerator::new()),
        service: config.service.clone(),
    }
}
