use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::PreprocessParams;
use crate::core::processing::geometry::PadSpec;
use crate::error::Result;

/// One successfully processed batch item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Position of the item in the input batch
    pub index: usize,
    pub source: String,
    pub original_width: usize,
    pub original_height: usize,
    /// Content size inside the padded square
    pub content_width: usize,
    pub content_height: usize,
    pub pad: PadSpec,
    pub encoded_bytes: usize,
    /// Output file name, when the item was written to disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// One failed batch item, recorded under the `continue` policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFailure {
    pub index: usize,
    pub source: String,
    pub error: String,
}

/// JSON sidecar describing a processed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchManifest {
    pub tool: String,
    pub created_at: DateTime<Utc>,
    pub dim: usize,
    pub jpeg_quality: u8,
    pub entries: Vec<ManifestEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ManifestFailure>,
}

impl BatchManifest {
    pub fn new(params: &PreprocessParams) -> Self {
        Self {
            tool: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            created_at: Utc::now(),
            dim: params.dim,
            jpeg_quality: params.jpeg_quality,
            entries: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Writes the manifest as pretty-printed JSON.
pub fn write_manifest(output: &Path, manifest: &BatchManifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(output, json)?;
    info!("Created batch manifest: {:?}", output);
    Ok(())
}
