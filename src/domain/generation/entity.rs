//! Text-to-image request and result types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Model used when a request does not name one
pub const DEFAULT_MODEL_ID: &str = "stable-diffusion-v1-5";

/// Note attached to every placeholder result
pub const PLACEHOLDER_NOTE: &str =
    "This is a placeholder response. Connect to your actual image generation service.";

/// Body of `POST /api/txt2img`.
///
/// Values are kept exactly as sent, whatever their JSON type. Defaults apply
/// only when a key is absent; an explicit `null` is preserved. Unknown keys
/// are ignored. Anything other than a JSON object is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Txt2ImgRequest {
    pub prompt: Option<Value>,
    pub model_name: Option<Value>,
}

impl From<Map<String, Value>> for Txt2ImgRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            prompt: body.remove("prompt"),
            model_name: body.remove("model_name"),
        }
    }
}

impl Txt2ImgRequest {
    pub fn new(prompt: impl Into<Value>, model_name: impl Into<Value>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            model_name: Some(model_name.into()),
        }
    }

    /// Prompt as sent, empty string when absent
    pub fn prompt(&self) -> Value {
        self.prompt
            .clone()
            .unwrap_or_else(|| Value::String(String::new()))
    }

    /// Requested model as sent, [`DEFAULT_MODEL_ID`] when absent
    pub fn model_name(&self) -> Value {
        self.model_name
            .clone()
            .unwrap_or_else(|| Value::String(DEFAULT_MODEL_ID.to_string()))
    }
}

/// What the generator accepted for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationTicket {
    pub prompt: Value,
    pub model: Value,
    pub note: String,
}

/// JSON type name of a value, for logging
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
