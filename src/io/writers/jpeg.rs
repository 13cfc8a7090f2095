use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};

use crate::core::params::MAX_DIM;
use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

/// Encodes an RGB raster as JPEG bytes in memory.
pub fn encode_rgb_jpeg(image: &RasterImage, quality: u8) -> Result<Vec<u8>> {
    let (cols, rows) = checked_dims(image)?;
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder.encode(image.bytes()?, cols, rows, ColorType::Rgb)?;
    Ok(buf)
}

/// Encodes an RGB raster as JPEG directly to a file.
pub fn write_rgb_jpeg(output: &Path, image: &RasterImage, quality: u8) -> Result<()> {
    let (cols, rows) = checked_dims(image)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder.encode(image.bytes()?, cols, rows, ColorType::Rgb)?;
    Ok(())
}

// JPEG dimensions are 16-bit
fn checked_dims(image: &RasterImage) -> Result<(u16, u16)> {
    let cols = image.width();
    let rows = image.height();
    if cols > MAX_DIM || rows > MAX_DIM {
        return Err(Error::InvalidDimension {
            dim: cols.max(rows),
        });
    }
    Ok((cols as u16, rows as u16))
}
