use tracing::info;

use crate::core::params::MAX_DIM;
use crate::core::processing::geometry::{FitPlan, compute_fit_plan};
use crate::core::processing::padding::pad_to_square;
use crate::core::processing::resize::{pick_resize_alg, resize_rgb};
use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

/// Scales `image` so its long side matches `dim` with aspect ratio preserved,
/// then centers it on a `dim` x `dim` black canvas. Returns the padded raster
/// together with the fit geometry.
pub fn resize_and_pad_with_plan(image: &RasterImage, dim: usize) -> Result<(RasterImage, FitPlan)> {
    if dim == 0 || dim > MAX_DIM {
        return Err(Error::InvalidDimension { dim });
    }

    let (rows, cols) = (image.height(), image.width());
    let plan = compute_fit_plan(cols, rows, dim);
    info!(
        "Original size: {}x{}, content size: {}x{}",
        cols, rows, plan.scaled_w, plan.scaled_h
    );

    // If already at the planned content size, skip resizing
    let scaled = if plan.scaled_w == cols && plan.scaled_h == rows {
        image.clone()
    } else {
        let alg = pick_resize_alg(cols, rows, plan.scaled_w, plan.scaled_h);
        resize_rgb(image, plan.scaled_w, plan.scaled_h, alg)?
    };

    if plan.pad.is_zero() {
        Ok((scaled, plan))
    } else {
        let padded = pad_to_square(&scaled, dim, &plan.pad)?;
        Ok((padded, plan))
    }
}

/// [`resize_and_pad_with_plan`] without the geometry.
pub fn resize_and_pad(image: &RasterImage, dim: usize) -> Result<RasterImage> {
    let (padded, _plan) = resize_and_pad_with_plan(image, dim)?;
    Ok(padded)
}
