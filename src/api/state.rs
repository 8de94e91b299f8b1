//! Application state shared by the handlers

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::domain::{ImageGenerator, ModelCatalog};

/// Read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub model_catalog: Arc<dyn ModelCatalog>,
    pub image_generator: Arc<dyn ImageGenerator>,
    pub service: ServiceConfig,
}

impl AppState {
    pub fn new(
        model_catalog: Arc<dyn ModelCatalog>,
        image_generator: Arc<dyn ImageGenerator>,
        service: ServiceConfig,
    ) -> Self {
        Self {
            model_catalog,
            image_generator,
            service,
        }
    }
}
