use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::health;
use super::middleware::logging_middleware;
use super::models;
use super::root;
use super::state::AppState;
use super::txt2img;
use crate::config::CorsConfig;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";
pub const MODELS_PATH: &str = "/api/models";
pub const TXT2IMG_PATH: &str = "/api/txt2img";

/// A route as listed in the startup banner
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Every route served, in banner order
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: ROOT_PATH,
        description: "Root endpoint",
    },
    Endpoint {
        method: "GET",
        path: MODELS_PATH,
        description: "Get available models",
    },
    Endpoint {
        method: "POST",
        path: TXT2IMG_PATH,
        description: "Text to image generation",
    },
    Endpoint {
        method: "GET",
        path: HEALTH_PATH,
        description: "Health check",
    },
];

/// Create the router with application state and CORS policy
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route(ROOT_PATH, get(root::root))
        .route(HEALTH_PATH, get(health::health_check))
        .route(MODELS_PATH, get(models::list_models))
        .route(TXT2IMG_PATH, post(txt2img::txt2img))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
