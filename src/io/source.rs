use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Where an image comes from: a local file or an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// Classifies a source spec. Anything starting with `http://` or
    /// `https://` is fetched over the network; everything else is treated as
    /// a local path, even if it mentions "http" elsewhere.
    pub fn from_spec(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            ImageSource::Url(spec.to_string())
        } else {
            ImageSource::Path(PathBuf::from(spec))
        }
    }

    /// Reads the raw source bytes without decoding them.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            ImageSource::Path(path) => {
                debug!("Reading {:?}", path);
                fs::read(path).map_err(|source| Error::SourceRead {
                    path: path.clone(),
                    source,
                })
            }
            ImageSource::Url(url) => {
                debug!("Fetching {}", url);
                let client = reqwest::blocking::Client::new();
                let response = client
                    .get(url)
                    .send()
                    .and_then(|response| response.error_for_status())
                    .map_err(|source| Error::SourceFetch {
                        url: url.clone(),
                        source,
                    })?;
                let bytes = response.bytes().map_err(|source| Error::SourceFetch {
                    url: url.clone(),
                    source,
                })?;
                Ok(bytes.to_vec())
            }
        }
    }

    /// Best-effort short name for output files: the file stem for paths, the
    /// last segment with query and extension stripped for URLs.
    pub fn stem(&self) -> Option<String> {
        match self {
            ImageSource::Path(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned()),
            ImageSource::Url(url) => {
                let tail = url.rsplit('/').next().unwrap_or(url);
                let tail = tail.split(['?', '#']).next().unwrap_or(tail);
                let stem = tail.rsplit_once('.').map(|(s, _)| s).unwrap_or(tail);
                if stem.is_empty() {
                    None
                } else {
                    Some(stem.to_string())
                }
            }
        }
    }
}

impl From<&str> for ImageSource {
    fn from(spec: &str) -> Self {
        ImageSource::from_spec(spec)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_prefixes_become_urls() {
        assert_eq!(
            ImageSource::from_spec("http://host/cat.jpg"),
            ImageSource::Url("http://host/cat.jpg".to_string())
        );
        assert_eq!(
            ImageSource::from_spec("https://host/cat.jpg"),
            ImageSource::Url("https://host/cat.jpg".to_string())
        );
    }

    #[test]
    fn everything_else_is_a_path() {
        assert_eq!(
            ImageSource::from_spec("photos/cat.png"),
            ImageSource::Path(PathBuf::from("photos/cat.png"))
        );
        // "http" inside a path must not trigger URL handling
        assert_eq!(
            ImageSource::from_spec("photos/http_cat.png"),
            ImageSource::Path(PathBuf::from("photos/http_cat.png"))
        );
        assert_eq!(
            ImageSource::from_spec("httpx://host/cat.png"),
            ImageSource::Path(PathBuf::from("httpx://host/cat.png"))
        );
    }

    #[test]
    fn display_round_trips_the_spec() {
        for spec in ["photos/cat.png", "https://host/dir/cat.jpg?s=1"] {
            assert_eq!(ImageSource::from_spec(spec).to_string(), spec);
        }
    }

    #[test]
    fn stems_for_paths_and_urls() {
        assert_eq!(
            ImageSource::from_spec("photos/cat.png").stem().as_deref(),
            Some("cat")
        );
        assert_eq!(
            ImageSource::from_spec("https://host/a/dog.jpeg?sz=2")
                .stem()
                .as_deref(),
            Some("dog")
        );
        assert_eq!(ImageSource::from_spec("https://host/a/").stem(), None);
    }

    #[test]
    fn missing_file_is_a_source_read_error() {
        let source = ImageSource::from_spec("definitely/not/here.png");
        assert!(matches!(source.fetch(), Err(Error::SourceRead { .. })));
    }

    #[test]
    fn refused_connection_is_a_source_fetch_error() {
        // Port 1 on loopback is reliably closed
        let source = ImageSource::from_spec("http://127.0.0.1:1/cat.jpg");
        match source.fetch() {
            Err(Error::SourceFetch { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:1/cat.jpg");
            }
            other => panic!("expected SourceFetch error, got {:?}", other.map(|b| b.len())),
        }
    }
}
