//! Deterministic resize-and-pad transform: fit geometry, filtered resampling,
//! and square zero-padding.
pub mod geometry;
pub mod padding;
pub mod resize;
pub mod transform;
