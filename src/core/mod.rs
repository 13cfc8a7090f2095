//! Core processing building blocks: the RGB raster container, preprocessing
//! parameters, and the resize/padding transform. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod raster;
