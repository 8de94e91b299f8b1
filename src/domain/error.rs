use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Generation error: {message}")]
    Generation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error() {
        let error = DomainError::catalog("model directory unreadable");
        assert_eq!(error.to_string(), "Catalog error: model directory unreadable");
    }

    #[test]
    fn test_generation_error() {
        let error = DomainError::generation("backend offline");
        assert_eq!(error.to_string(), "Generation error: backend offline");
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("boom");
        assert_eq!(error.to_string(), "Internal error: boom");
    }
}
