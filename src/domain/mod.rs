//! Domain layer - Model catalog and image generation contracts

pub mod error;
pub mod generation;
pub mod model;

pub use error::DomainError;
pub use generation::{
    json_kind, GenerationTicket, ImageGenerator, PlaceholderGenerator, Txt2ImgRequest,
    DEFAULT_MODEL_ID, PLACEHOLDER_NOTE,
};
pub use model::{ModelCatalog, ModelDescriptor, StaticModelCatalog};
