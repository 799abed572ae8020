//! Error types for voxmap.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building affines or mapping voxel indices.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector or matrix argument has the wrong number of components.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Matrix rows do not describe an affine transform.
    #[error("invalid affine: {0}")]
    InvalidAffine(String),

    /// The affine cannot be inverted.
    #[error("singular matrix (determinant {determinant})")]
    SingularMatrix {
        /// Determinant of the 3x3 linear part.
        determinant: f64,
    },
}

impl Error {
    /// Build an [`Error::InvalidDimensions`] for a vector argument of the wrong length.
    pub(crate) fn vector_length(name: &str, expected: usize, got: usize) -> Self {
        Self::InvalidDimensions(format!(
            "{} must have {} components, got {}",
            name, expected, got
        ))
    }
}
