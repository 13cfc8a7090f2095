use tracing::debug;

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

/// Decodes compressed image bytes into an RGB raster. The container format
/// is auto-detected; grayscale, paletted, and alpha inputs are converted to
/// RGB. `origin` identifies the source in errors and logs.
pub fn decode_image(bytes: &[u8], origin: &str) -> Result<RasterImage> {
    let decoded = image::load_from_memory(bytes).map_err(|source| Error::Decode {
        origin: origin.to_string(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!("Decoded {}: {}x{}", origin, width, height);
    RasterImage::from_raw(height as usize, width as usize, rgb.into_raw())
}
