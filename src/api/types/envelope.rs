//! Status envelopes returned by the `/api` endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{GenerationTicket, ModelDescriptor};

/// Message returned with every accepted text-to-image request
pub const TXT2IMG_READY_MESSAGE: &str = "Image generation endpoint is ready";

/// Outcome carried in the `status` field of every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `GET /api/models` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub status: EnvelopeStatus,
    pub models: Vec<ModelDescriptor>,
}

impl ModelsResponse {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            models,
        }
    }
}

/// `POST /api/txt2img` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Txt2ImgResponse {
    pub status: EnvelopeStatus,
    pub message: String,
    pub data: GenerationTicket,
}

impl Txt2ImgResponse {
    pub fn new(data: GenerationTicket) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: TXT2IMG_READY_MESSAGE.to_string(),
            data,
        }
    }
}

/// Envelope for any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: EnvelopeStatus,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            error: error.into(),
        }
    }
}
