//! High-level, ergonomic library API: prepare single images to buffers or
//! files, and batch helpers with explicit failure policies. Prefer these
//! entrypoints over low-level processing modules when integrating IMGPREP.
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::PreprocessParams;
use crate::core::processing::geometry::PadSpec;
use crate::core::processing::transform::resize_and_pad_with_plan;
use crate::error::{Error, Result};
use crate::io::decode::decode_image;
use crate::io::source::ImageSource;
use crate::io::writers::jpeg::encode_rgb_jpeg;
use crate::types::BatchErrorPolicy;

/// Result of in-memory preparation of one image
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub source: ImageSource,
    /// Encoded JPEG of the padded square
    pub jpeg: Vec<u8>,
    pub original_width: usize,
    pub original_height: usize,
    /// Scaled content size inside the square
    pub content_width: usize,
    pub content_height: usize,
    pub pad: PadSpec,
}

/// One successful batch item together with its input position.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub index: usize,
    pub prepared: PreparedImage,
}

/// One failed batch item, collected under [`BatchErrorPolicy::Continue`].
#[derive(Debug)]
pub struct BatchFailure {
    pub index: usize,
    pub source: ImageSource,
    pub error: Error,
}

/// Outcome of a batch run. Items keep their input positions, so with no
/// failures `items[i]` corresponds to `sources[i]`.
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub items: Vec<BatchItem>,
    pub failures: Vec<BatchFailure>,
}

/// Counters summarizing a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

impl BatchOutput {
    pub fn report(&self) -> BatchReport {
        BatchReport {
            processed: self.items.len(),
            failed: self.failures.len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Encoded JPEG buffers in batch order, ready to feed a
    /// [`crate::serving::PredictionService`]. Call only on complete batches
    /// if positional alignment with the inputs matters.
    pub fn into_buffers(self) -> Vec<Vec<u8>> {
        self.items.into_iter().map(|item| item.prepared.jpeg).collect()
    }
}

/// Fetches, decodes, resizes-and-pads, and JPEG-encodes one image in memory
/// (no disk output).
pub fn prepare_image(source: &ImageSource, params: &PreprocessParams) -> Result<PreparedImage> {
    params.validate()?;

    let bytes = source.fetch()?;
    let image = decode_image(&bytes, &source.to_string())?;
    let (original_height, original_width) = (image.height(), image.width());

    let (padded, plan) = resize_and_pad_with_plan(&image, params.dim)?;
    let jpeg = encode_rgb_jpeg(&padded, params.jpeg_quality)?;

    Ok(PreparedImage {
        source: source.clone(),
        jpeg,
        original_width,
        original_height,
        content_width: plan.scaled_w,
        content_height: plan.scaled_h,
        pad: plan.pad,
    })
}

/// [`prepare_image`], then writes the encoded JPEG to `output`.
pub fn prepare_image_to_path(
    source: &ImageSource,
    output: &Path,
    params: &PreprocessParams,
) -> Result<PreparedImage> {
    let prepared = prepare_image(source, params)?;
    fs::write(output, &prepared.jpeg)?;
    info!("Wrote {:?} ({} bytes)", output, prepared.jpeg.len());
    Ok(prepared)
}

/// Prepares every source in order, one output per input.
///
/// Failure handling follows `params.on_error`: `FailFast` aborts on the
/// first failing item and returns its error wrapped with the item position,
/// leaving later items untouched; `Continue` records the failure and keeps
/// going, so the result can hold both items and failures.
pub fn encode_batch(sources: &[ImageSource], params: &PreprocessParams) -> Result<BatchOutput> {
    params.validate()?;

    let mut output = BatchOutput::default();
    for (index, source) in sources.iter().enumerate() {
        match prepare_image(source, params) {
            Ok(prepared) => output.items.push(BatchItem { index, prepared }),
            Err(error) => match params.on_error {
                BatchErrorPolicy::FailFast => {
                    return Err(Error::batch_item(index, source.to_string(), error));
                }
                BatchErrorPolicy::Continue => {
                    warn!("Skipping item {} ({}): {}", index, source, error);
                    output.failures.push(BatchFailure {
                        index,
                        source: source.clone(),
                        error,
                    });
                }
            },
        }
    }

    let report = output.report();
    info!(
        "Batch done: {} processed, {} failed",
        report.processed, report.failed
    );
    Ok(output)
}
