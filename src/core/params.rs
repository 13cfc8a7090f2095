use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::BatchErrorPolicy;

/// Default target side length of the square output, in pixels.
pub const DEFAULT_DIM: usize = 224;
/// Default JPEG quality for encoded outputs.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
/// Largest target dimension the JPEG writer can represent.
pub const MAX_DIM: usize = u16::MAX as usize;

/// Preprocessing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessParams {
    /// Target side length of the square output in pixels
    pub dim: usize,
    /// JPEG quality (1-100) for encoded outputs
    pub jpeg_quality: u8,
    /// Batch behavior when a single item fails
    pub on_error: BatchErrorPolicy,
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            on_error: BatchErrorPolicy::FailFast,
        }
    }
}

impl PreprocessParams {
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 || self.dim > MAX_DIM {
            return Err(Error::InvalidDimension { dim: self.dim });
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = PreprocessParams::default();
        assert_eq!(params.dim, 224);
        assert_eq!(params.jpeg_quality, 95);
        assert_eq!(params.on_error, BatchErrorPolicy::FailFast);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_dim_is_rejected() {
        let params = PreprocessParams {
            dim: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidDimension { dim: 0 })
        ));
    }

    #[test]
    fn oversized_dim_is_rejected() {
        let params = PreprocessParams {
            dim: MAX_DIM + 1,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn quality_bounds_are_enforced() {
        for quality in [0u8, 101] {
            let params = PreprocessParams {
                jpeg_quality: quality,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(Error::InvalidArgument { arg: "jpeg_quality", .. })
            ));
        }
    }
}
