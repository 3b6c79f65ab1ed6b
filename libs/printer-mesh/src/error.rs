//! # Mesh Errors
//!
//! Error types for mesh generation. Every failure is synchronous and local
//! to one generation call; callers keep their last valid mesh on error.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Shape identifier is not part of the catalog
    #[error("Unknown shape: {id}")]
    UnknownShape { id: String },

    /// A generation parameter is out of its valid range
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Generation settings failed validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an unknown shape error.
    pub fn unknown_shape(id: impl Into<String>) -> Self {
        Self::UnknownShape { id: id.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::unknown_shape("Z9");
        assert_eq!(err.to_string(), "Unknown shape: Z9");

        let err = MeshError::invalid_parameter("progress", "must be within [0, 1], got 1.5");
        assert!(err.to_string().contains("progress"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidSampleFactor(0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    /// Errors cross thread boundaries in batch generation.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
