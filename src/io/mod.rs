//! I/O layer for fetching and decoding image sources.
//! Provides the `source` fetchers for local paths and HTTP URLs, the
//! `decode` adapter, and `writers` for JPEG outputs and manifest sidecars.
pub mod source;
pub use source::ImageSource;

pub mod decode;
pub use decode::decode_image;

pub mod writers;
