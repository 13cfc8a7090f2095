use serde::{Deserialize, Serialize};

/// Zero-padding applied on each edge of scaled content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PadSpec {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl PadSpec {
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub fn is_zero(&self) -> bool {
        self.vertical() == 0 && self.horizontal() == 0
    }
}

/// Scaled content size and the padding that centers it on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitPlan {
    pub scaled_w: usize,
    pub scaled_h: usize,
    pub pad: PadSpec,
}

/// Computes how a `width` x `height` image fits a `dim` x `dim` canvas with
/// aspect ratio preserved. The long side is scaled to `dim`, the short side
/// proportionally (rounded, never below one pixel), and the leftover is split
/// between the two edges with any odd pixel on the bottom or right.
///
/// All inputs must be at least 1.
pub fn compute_fit_plan(width: usize, height: usize, dim: usize) -> FitPlan {
    let aspect = width as f64 / height as f64;

    if aspect > 1.0 {
        let scaled_h = ((dim as f64 / aspect).round() as usize).max(1).min(dim);
        let total = dim - scaled_h;
        FitPlan {
            scaled_w: dim,
            scaled_h,
            pad: PadSpec {
                top: total / 2,
                bottom: total - total / 2,
                left: 0,
                right: 0,
            },
        }
    } else if aspect < 1.0 {
        let scaled_w = ((dim as f64 * aspect).round() as usize).max(1).min(dim);
        let total = dim - scaled_w;
        FitPlan {
            scaled_w,
            scaled_h: dim,
            pad: PadSpec {
                top: 0,
                bottom: 0,
                left: total / 2,
                right: total - total / 2,
            },
        }
    } else {
        FitPlan {
            scaled_w: dim,
            scaled_h: dim,
            pad: PadSpec::default(),
        }
    }
}
