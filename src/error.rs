//! Crate-level error type and `Result` alias.
//! Wraps I/O, image codec, PDF, and manifest errors, and provides semantic
//! variants for grid geometry and image validation failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path:?}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub(crate) fn image_load(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::ImageLoad {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn geometry(msg: impl Into<String>) -> Self {
        Error::InvalidGeometry(msg.into())
    }
}
