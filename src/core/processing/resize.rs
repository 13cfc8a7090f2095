use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

/// Filter choice by scale direction: an area-style box filter when shrinking,
/// Catmull-Rom cubic when enlarging. Aspect ratio is preserved upstream, so
/// both axes always scale the same way.
pub fn pick_resize_alg(
    original_w: usize,
    original_h: usize,
    target_w: usize,
    target_h: usize,
) -> ResizeAlg {
    if original_w > target_w || original_h > target_h {
        ResizeAlg::Convolution(FilterType::Box)
    } else {
        ResizeAlg::Convolution(FilterType::CatmullRom)
    }
}

pub fn resize_rgb(
    src: &RasterImage,
    target_w: usize,
    target_h: usize,
    alg: ResizeAlg,
) -> Result<RasterImage> {
    let resize_options = ResizeOptions::new().resize_alg(alg);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width() as u32,
        src.height() as u32,
        src.bytes()?.to_vec(),
        PixelType::U8x3,
    )
    .map_err(Error::processing)?;
    let mut dst_image = Image::new(target_w as u32, target_h as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::processing)?;

    RasterImage::from_raw(target_h, target_w, dst_image.into_vec())
}
