//! Model descriptor entity

use serde::{Deserialize, Serialize};

/// A generation model advertised by `/api/models`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Weights file name on disk
    pub filename: String,
    pub id: String,
    /// Human readable name
    pub name: String,
}

impl ModelDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            id: id.into(),
            name: name.into(),
        }
    }

    /// Stable Diffusion v1.5, the only model shipped with the service
    pub fn stable_diffusion_v1_5() -> Self {
        Self::new(
            "stable-diffusion-v1-5",
            "Stable Diffusion v1.5",
            "stable-diffusion-v1-5.safetensors",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_descriptor() {
        let model = ModelDescriptor::stable_diffusion_v1_5();

        assert_eq!(model.id, "stable-diffusion-v1-5");
        assert_eq!(model.name, "Stable Diffusion v1.5");
        assert_eq!(model.filename, "stable-diffusion-v1-5.safetensors");
    }

    #[test]
    fn test_descriptor_serialization() {
        let json = serde_json::to_value(ModelDescriptor::stable_diffusion_v1_5()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "filename": "stable-diffusion-v1-5.safetensors",
                "id": "stable-diffusion-v1-5",
                "name": "Stable Diffusion v1.5"
            })
        );
    }
}
