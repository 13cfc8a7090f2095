//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, and encode errors, and provides semantic
//! variants for argument validation and per-item batch failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Target dimension must be between 1 and {max}, got: {dim}", max = u16::MAX)]
    InvalidDimension { dim: usize },

    #[error("Image must have positive dimensions, got: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("Raster buffer length mismatch: expected {expected} bytes, got {actual}")]
    RasterLayout { expected: usize, actual: usize },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Cannot read source {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot fetch source {url}: {source}")]
    SourceFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cannot decode image from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    #[error("JPEG encoding error: {0}")]
    JpegEncode(#[from] jpeg_encoder::EncodingError),

    #[error("Malformed label entry at {}:{line}", .path.display())]
    LabelParse { path: PathBuf, line: usize },

    #[error("Batch item {index} ({origin}): {cause}")]
    BatchItem {
        index: usize,
        origin: String,
        #[source]
        cause: Box<Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }

    /// Wraps a per-item failure with the item's batch position and source spec.
    pub fn batch_item(index: usize, origin: impl Into<String>, cause: Error) -> Self {
        Error::BatchItem {
            index,
            origin: origin.into(),
            cause: Box::new(cause),
        }
    }
}
