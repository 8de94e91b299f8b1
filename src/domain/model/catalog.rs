//! Model catalog trait and the static built-in catalog

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::ModelDescriptor;
use crate::domain::DomainError;

/// Source of the models listed by the API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// List every available model
    async fn list(&self) -> Result<Vec<ModelDescriptor>, DomainError>;
}

/// Catalog backed by a fixed list built at startup
#[derive(Debug, Clone)]
pub struct StaticModelCatalog {
    models: Arc<[ModelDescriptor]>,
}

impl StaticModelCatalog {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            models: models.into(),
        }
    }

    /// Catalog holding only the models shipped with the service
    pub fn builtin() -> Self {
        Self::new(vec![ModelDescriptor::stable_diffusion_v1_5()])
    }
}

#[async_trait]
impl ModelCatalog for StaticModelCatalog {
    async fn list(&self) -> Result<Vec<ModelDescriptor>, DomainError> {
        Ok(self.models.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_one_model() {
        let catalog = StaticModelCatalog::builtin();
        let models = tokio_test::block_on(catalog.list()).unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "stable-diffusion-v1-5");
    }

    #[tokio::test]
    async fn test_list_is_stable_across_calls() {
        let catalog = StaticModelCatalog::new(vec![
            ModelDescriptor::new("a", "A", "a.safetensors"),
            ModelDescriptor::new("b", "B", "b.ckpt"),
        ]);

        let first = catalog.list().await.unwrap();
        let second = catalog.list().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first[1].filename, "b.ckpt");
    }
}
