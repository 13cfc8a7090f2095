#![doc = r#"
IMGPREP — client-side image preprocessing for classification serving.

This crate turns arbitrary images (local files or HTTP URLs) into the square,
zero-padded JPEGs that image-classification services expect: the long side is
scaled to the target dimension with aspect ratio preserved, the remainder is
filled with black padding, and the result is JPEG-encoded. It powers the
IMGPREP CLI and can be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on top
of a working MVP used by the CLI and is robust, but may evolve as the crate
stabilizes. Breaking changes can occur.

Requirements
------------
- Rust 2024 edition toolchain.
- TLS libraries for `https` sources (reqwest's default backend).

Add dependency
--------------
```toml
[dependencies]
imgprep = "0.1"
```

Quick start: prepare one image to a file
----------------------------------------
```rust,no_run
use std::path::Path;
use imgprep::{ImageSource, PreprocessParams, prepare_image_to_path};

fn main() -> imgprep::Result<()> {
    let params = PreprocessParams::default(); // 224x224, JPEG quality 95
    let source = ImageSource::from_spec("photos/cat.png");
    prepare_image_to_path(&source, Path::new("out/cat_224.jpg"), &params)?;
    Ok(())
}
```

Batch preparation with an explicit failure policy
-------------------------------------------------
```rust,no_run
use imgprep::{BatchErrorPolicy, ImageSource, PreprocessParams, encode_batch};

fn main() -> imgprep::Result<()> {
    let sources = vec![
        ImageSource::from_spec("photos/cat.png"),
        ImageSource::from_spec("https://example.com/dog.jpg"),
    ];
    let params = PreprocessParams {
        on_error: BatchErrorPolicy::Continue,
        ..Default::default()
    };

    let output = encode_batch(&sources, &params)?;
    let report = output.report();
    println!("processed={} failed={}", report.processed, report.failed);
    Ok(())
}
```

The transform on its own (when you already have pixels)
-------------------------------------------------------
```rust
use imgprep::{RasterImage, resize_and_pad};

fn square(image: &RasterImage) -> imgprep::Result<RasterImage> {
    resize_and_pad(image, 224)
}
```

Labels for model output
-----------------------
Class-id indexing differs between model exports, so the origin is always
explicit:

```rust,no_run
use std::path::Path;
use imgprep::{IndexOrigin, LabelMap};

fn main() -> imgprep::Result<()> {
    let labels = LabelMap::from_file(Path::new("imagenet_labels.txt"))?;
    // Estimator-style exports ship one-based class ids
    println!("{:?}", labels.get(286, IndexOrigin::OneBased));
    Ok(())
}
```

Error handling
--------------
All public functions return `imgprep::Result<T>`; match on `imgprep::Error`
to handle specific cases, e.g. fetch or decode failures.

```rust,no_run
use imgprep::{Error, ImageSource, PreprocessParams, prepare_image};

fn main() {
    let source = ImageSource::from_spec("https://example.com/cat.jpg");
    match prepare_image(&source, &PreprocessParams::default()) {
        Ok(prepared) => println!("{} bytes", prepared.jpeg.len()),
        Err(Error::SourceFetch { url, .. }) => eprintln!("fetch failed: {url}"),
        Err(Error::Decode { origin, .. }) => eprintln!("not a decodable image: {origin}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (`IndexOrigin`, `BatchErrorPolicy`).
- [`io`] — source fetching, decoding, and JPEG/manifest writers.
- [`serving`] — the `PredictionService` trait and label table.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod serving;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::PreprocessParams;
pub use crate::core::processing::geometry::{FitPlan, PadSpec, compute_fit_plan};
pub use crate::core::raster::RasterImage;
pub use error::{Error, Result};
pub use types::{BatchErrorPolicy, IndexOrigin};

// Transform and writers
pub use crate::core::processing::transform::{resize_and_pad, resize_and_pad_with_plan};
pub use io::decode::decode_image;
pub use io::source::ImageSource;
pub use io::writers::jpeg::{encode_rgb_jpeg, write_rgb_jpeg};
pub use io::writers::manifest::{BatchManifest, ManifestEntry, ManifestFailure, write_manifest};

// Serving collaborators
pub use serving::{ImagePredictions, LabelMap, LabeledPrediction, Prediction, PredictionService};

// High-level API re-exports
pub use api::{
    BatchFailure, BatchItem, BatchOutput, BatchReport, PreparedImage, encode_batch, prepare_image,
    prepare_image_to_path,
};
