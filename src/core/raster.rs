//! Owned 8-bit RGB raster backed by an `ndarray` array of shape
//! `(height, width, 3)` in standard (row-major, interleaved) layout.
use ndarray::Array3;

use crate::error::{Error, Result};

/// Decoded RGB image data. Rows are indexed top to bottom, columns left to
/// right, channels in R, G, B order.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    data: Array3<u8>,
}

impl RasterImage {
    /// Builds a raster from interleaved RGB bytes in row-major order.
    pub fn from_raw(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let expected = height * width * 3;
        if data.len() != expected {
            return Err(Error::RasterLayout {
                expected,
                actual: data.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, 3), data).map_err(Error::processing)?;
        Ok(Self { data })
    }

    /// Wraps an existing `(height, width, 3)` array, normalizing it to
    /// standard layout so the raw bytes stay interleaved row-major.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if height == 0 || width == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        if channels != 3 {
            return Err(Error::RasterLayout {
                expected: height * width * 3,
                actual: height * width * channels,
            });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Solid-color raster of the given size.
    pub fn filled(height: usize, width: usize, rgb: [u8; 3]) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let data = Array3::from_shape_fn((height, width, 3), |(_, _, c)| rgb[c]);
        Ok(Self { data })
    }

    /// All-black raster of the given size.
    pub fn zeros(height: usize, width: usize) -> Result<Self> {
        Self::filled(height, width, [0, 0, 0])
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// RGB triple at `(row, col)`. Panics if out of bounds, like array
    /// indexing.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    /// Read-only view of the underlying array.
    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// Consumes the raster and returns the interleaved RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec()
    }

    /// Interleaved RGB bytes. Contiguity is a construction invariant, so
    /// this only fails if that invariant is broken.
    pub(crate) fn bytes(&self) -> Result<&[u8]> {
        self.data
            .as_slice()
            .ok_or_else(|| Error::Processing("raster buffer is not contiguous".into()))
    }
}
