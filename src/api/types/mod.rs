//! Response envelopes and request extraction

pub mod envelope;
pub mod error;
pub mod json;

pub use envelope::{EnvelopeStatus, ErrorResponse, ModelsResponse, Txt2ImgResponse};
pub use error::ApiError;
pub use json::Json;
