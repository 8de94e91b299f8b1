//! Image generator trait and the placeholder implementation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{GenerationTicket, Txt2ImgRequest, PLACEHOLDER_NOTE};
use crate::domain::DomainError;

/// Backend that turns a text prompt into an image
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Accept a text-to-image request
    async fn submit(&self, request: Txt2ImgRequest) -> Result<GenerationTicket, DomainError>;
}

/// Generator that echoes the request back without producing an image
#[derive(Debug, Clone, Default)]
pub struct PlaceholderGenerator;

impl PlaceholderGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageGenerator for PlaceholderGenerator {
    async fn submit(&self, request: Txt2ImgRequest) -> Result<GenerationTicket, DomainError> {
        Ok(GenerationTicket {
            prompt: request.prompt(),
            model: request.model_name(),
            note: PLACEHOLDER_NOTE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_echoes_request() {
        let generator = PlaceholderGenerator::new();
        let ticket = generator
            .submit(Txt2ImgRequest::new("a cat", "custom-model"))
            .await
            .unwrap();

        assert_eq!(ticket.prompt, "a cat");
        assert_eq!(ticket.model, "custom-model");
        assert_eq!(ticket.note, PLACEHOLDER_NOTE);
    }

    #[tokio::test]
    async fn test_placeholder_applies_defaults() {
        let ticket = PlaceholderGenerator::new()
            .submit(Txt2ImgRequest::default())
            .await
            .unwrap();

        assert_eq!(ticket.prompt, "");
        assert_eq!(ticket.model, "stable-diffusion-v1-5");
    }

    #[tokio::test]
    async fn test_placeholder_keeps_null_and_non_string_values() {
        let request = Txt2ImgRequest {
            prompt: Some(serde_json::Value::Null),
            model_name: Some(serde_json::json!({"x": 1})),
        };

        let ticket = PlaceholderGenerator::new().submit(request).await.unwrap();

        assert_eq!(ticket.prompt, serde_json::Value::Null);
        assert_eq!(ticket.model, serde_json::json!({"x": 1}));
    }
}
