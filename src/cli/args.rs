use clap::Parser;
use std::path::PathBuf;

use imgprep::core::params::{DEFAULT_DIM, DEFAULT_JPEG_QUALITY};
use imgprep::types::BatchErrorPolicy;

#[derive(Parser)]
#[command(name = "imgprep", version, about = "IMGPREP CLI")]
pub struct CliArgs {
    /// Image sources: local paths or http(s) URLs, processed in order
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Side length of the square output in pixels
    #[arg(short = 'd', long, default_value_t = DEFAULT_DIM)]
    pub dim: usize,

    /// JPEG quality (1-100) for encoded outputs
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,

    /// Output directory for encoded JPEGs
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// What to do when a single item fails (abort the batch or keep going)
    #[arg(long, value_enum, default_value_t = BatchErrorPolicy::FailFast)]
    pub on_error: BatchErrorPolicy,

    /// Write a manifest.json sidecar describing the batch
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
