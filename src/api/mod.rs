//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod models;
pub mod root;
pub mod router;
pub mod state;
pub mod txt2img;
pub mod types;

pub use router::create_router;
pub use state::AppState;
