//! Generation domain - Text-to-image requests and the generator seam

mod entity;
mod generator;

pub use entity::{
    json_kind, GenerationTicket, Txt2ImgRequest, DEFAULT_MODEL_ID, PLACEHOLDER_NOTE,
};
pub use generator::{ImageGenerator, PlaceholderGenerator};

#[cfg(test)]
pub use generator::MockImageGenerator;
