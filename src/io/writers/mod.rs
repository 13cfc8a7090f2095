//! Output writers: JPEG encoding (in memory or to file) and the JSON batch
//! manifest sidecar.
pub mod jpeg;
pub mod manifest;
