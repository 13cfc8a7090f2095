use ndarray::{Array3, s};
use tracing::debug;

use crate::core::processing::geometry::PadSpec;
use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

/// Centers `image` on a `dim` x `dim` black canvas at the offsets given by
/// `pad`. The padding plus the content size must equal `dim` on each axis.
pub fn pad_to_square(image: &RasterImage, dim: usize, pad: &PadSpec) -> Result<RasterImage> {
    let rows = image.height();
    let cols = image.width();

    if pad.top + rows + pad.bottom != dim || pad.left + cols + pad.right != dim {
        return Err(Error::Processing(format!(
            "padding {:?} does not place {}x{} content on a {}x{} canvas",
            pad, cols, rows, dim, dim
        )));
    }

    debug!(
        "Adding padding: cols={}, rows={}, pad={:?}, final dimensions: {}x{}",
        cols, rows, pad, dim, dim
    );

    let mut canvas = Array3::<u8>::zeros((dim, dim, 3));
    canvas
        .slice_mut(s![pad.top..pad.top + rows, pad.left..pad.left + cols, ..])
        .assign(image.data());
    RasterImage::from_array(canvas)
}
