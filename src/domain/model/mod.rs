//! Model domain - Descriptors of the generation models the service advertises

mod catalog;
mod entity;

pub use catalog::{ModelCatalog, StaticModelCatalog};
pub use entity::ModelDescriptor;

#[cfg(test)]
pub use catalog::MockModelCatalog;
