//! # Package Errors

use braille_cell::CellError;
use config::ConfigError;
use plate_mesh::MeshError;
use thiserror::Error;

/// Errors raised while exporting a plate package.
///
/// I/O failures are passed through unchanged so callers can match on the
/// underlying [`std::io::ErrorKind`].
#[derive(Debug, Error)]
pub enum PackageError {
    /// Writing the archive or one of its entries failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The zip writer rejected an entry.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A plate mesh could not be built.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Layout settings were rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A word mapping edit referenced bad data.
    #[error("Cell error: {0}")]
    Cell(#[from] CellError),
}

/// Result type alias for packaging operations.
pub type PackageResult<T> = Result<T, PackageError>;
