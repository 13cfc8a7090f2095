use std::fs;

use tracing::{info, warn};

use imgprep::api::encode_batch;
use imgprep::core::params::PreprocessParams;
use imgprep::io::ImageSource;
use imgprep::io::writers::manifest::{
    BatchManifest, ManifestEntry, ManifestFailure, write_manifest,
};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = PreprocessParams {
        dim: args.dim,
        jpeg_quality: args.quality,
        on_error: args.on_error,
    };
    let sources: Vec<ImageSource> = args
        .sources
        .iter()
        .map(|spec| ImageSource::from_spec(spec))
        .collect();

    fs::create_dir_all(&args.output_dir)?;

    info!(
        "Preprocessing {} source(s) to {:?} at {}x{}",
        sources.len(),
        args.output_dir,
        args.dim,
        args.dim
    );

    let output = encode_batch(&sources, &params)?;
    let mut manifest = BatchManifest::new(&params);

    for item in &output.items {
        let file_name = output_file_name(item.index, &item.prepared.source);
        let path = args.output_dir.join(&file_name);
        fs::write(&path, &item.prepared.jpeg)?;
        info!("Wrote {:?} ({} bytes)", path, item.prepared.jpeg.len());

        manifest.entries.push(ManifestEntry {
            index: item.index,
            source: item.prepared.source.to_string(),
            original_width: item.prepared.original_width,
            original_height: item.prepared.original_height,
            content_width: item.prepared.content_width,
            content_height: item.prepared.content_height,
            pad: item.prepared.pad,
            encoded_bytes: item.prepared.jpeg.len(),
            output: Some(file_name),
        });
    }

    for failure in &output.failures {
        warn!(
            "Failed item {} ({}): {}",
            failure.index, failure.source, failure.error
        );
        manifest.failures.push(ManifestFailure {
            index: failure.index,
            source: failure.source.to_string(),
            error: failure.error.to_string(),
        });
    }

    if args.manifest {
        write_manifest(&args.output_dir.join("manifest.json"), &manifest)?;
    }

    let report = output.report();
    info!("Batch complete!");
    info!("Processed: {}", report.processed);
    info!("Failed: {}", report.failed);

    if report.processed == 0 && report.failed > 0 {
        return Err(AppError::AllItemsFailed {
            failed: report.failed,
        });
    }

    Ok(())
}

/// Output name `NNN_<stem>.jpg`. The batch position keeps names unique and
/// ordered even when sources share a stem.
fn output_file_name(index: usize, source: &ImageSource) -> String {
    match source.stem() {
        Some(stem) => format!("{:03}_{}.jpg", index, sanitize(&stem)),
        None => format!("{:03}.jpg", index),
    }
}

fn sanitize(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_carry_index_and_stem() {
        let source = ImageSource::from_spec("photos/cat.png");
        assert_eq!(output_file_name(0, &source), "000_cat.jpg");

        let source = ImageSource::from_spec("https://host/dir/dog.jpeg?sz=2");
        assert_eq!(output_file_name(12, &source), "012_dog.jpg");
    }

    #[test]
    fn stemless_sources_fall_back_to_the_index() {
        let source = ImageSource::from_spec("https://host/a/");
        assert_eq!(output_file_name(3, &source), "003.jpg");
    }

    #[test]
    fn awkward_characters_are_sanitized() {
        let source = ImageSource::from_spec("shots/two words & more.png");
        assert_eq!(output_file_name(1, &source), "001_two_words___more.jpg");
    }
}
