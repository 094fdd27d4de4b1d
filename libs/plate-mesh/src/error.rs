//! # Mesh Errors
//!
//! Error types for plate mesh generation and STL decoding.

use thiserror::Error;

/// Errors that can occur while building or reading plate meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Slab thickness was zero, negative or not finite.
    #[error("Invalid plate thickness: {0} mm")]
    InvalidThickness(f64),

    /// Tessellation parameters cannot form a closed ring.
    #[error("Invalid subdivision: {message}")]
    InvalidSubdivision { message: String },

    /// Bytes do not follow the binary STL layout.
    #[error("Invalid STL data: {message}")]
    InvalidStl { message: String },
}

impl MeshError {
    /// Creates an invalid subdivision error.
    pub fn invalid_subdivision(message: impl Into<String>) -> Self {
        Self::InvalidSubdivision {
            message: message.into(),
        }
    }

    /// Creates an invalid STL error.
    pub fn invalid_stl(message: impl Into<String>) -> Self {
        Self::InvalidStl {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
