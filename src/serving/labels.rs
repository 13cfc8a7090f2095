use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::IndexOrigin;

/// Immutable class-name table loaded once from a flat text file, looked up
/// by model class id under an explicit [`IndexOrigin`].
///
/// The file holds one `id: 'name',` entry per line, optionally wrapped in
/// `{`/`}`, the way ImageNet label tables are commonly distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    names: Vec<String>,
}

impl LabelMap {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parses entries from any reader; `origin` names the source in errors.
    pub fn from_reader(reader: impl BufRead, origin: &Path) -> Result<Self> {
        let mut names = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::SourceRead {
                path: origin.to_path_buf(),
                source,
            })?;
            let entry = line
                .trim()
                .trim_start_matches('{')
                .trim_end_matches('}')
                .trim();
            if entry.is_empty() {
                continue;
            }
            let (id, name) = parse_entry(entry).ok_or_else(|| Error::LabelParse {
                path: origin.to_path_buf(),
                line: number + 1,
            })?;
            // Ids must arrive in file order so lookups stay positional
            if id != names.len() {
                return Err(Error::LabelParse {
                    path: origin.to_path_buf(),
                    line: number + 1,
                });
            }
            names.push(name);
        }
        debug!("Loaded {} labels from {:?}", names.len(), origin);
        Ok(Self { names })
    }

    /// Label for a model class id under the given indexing convention.
    /// Returns `None` for ids outside the table, including class id 0
    /// against a one-based table.
    pub fn get(&self, class_id: i64, origin: IndexOrigin) -> Option<&str> {
        let index = match origin {
            IndexOrigin::ZeroBased => class_id,
            IndexOrigin::OneBased => class_id.checked_sub(1)?,
        };
        if index < 0 {
            return None;
        }
        self.names.get(index as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn parse_entry(entry: &str) -> Option<(usize, String)> {
    let (id, name) = entry.split_once(':')?;
    let id = id.trim().parse::<usize>().ok()?;
    let name = name.trim().trim_end_matches(',').trim();
    Some((id, strip_quotes(name).to_string()))
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    const SAMPLE: &str = "{0: 'tench, Tinca tinca',\n 1: 'goldfish, Carassius auratus',\n 2: \"potter's wheel\",\n 3: 'hammer'}\n";

    fn sample_map() -> LabelMap {
        LabelMap::from_reader(Cursor::new(SAMPLE.as_bytes()), &PathBuf::from("labels.txt"))
            .unwrap()
    }

    #[test]
    fn parses_braces_quotes_and_inner_commas() {
        let labels = sample_map();
        assert_eq!(labels.len(), 4);
        assert_eq!(
            labels.get(0, IndexOrigin::ZeroBased),
            Some("tench, Tinca tinca")
        );
        assert_eq!(labels.get(2, IndexOrigin::ZeroBased), Some("potter's wheel"));
        assert_eq!(labels.get(3, IndexOrigin::ZeroBased), Some("hammer"));
    }

    #[test]
    fn one_based_ids_shift_by_one() {
        let labels = sample_map();
        assert_eq!(
            labels.get(1, IndexOrigin::OneBased),
            Some("tench, Tinca tinca")
        );
        assert_eq!(labels.get(4, IndexOrigin::OneBased), Some("hammer"));
        // Class id 0 has no label under a one-based table
        assert_eq!(labels.get(0, IndexOrigin::OneBased), None);
    }

    #[test]
    fn out_of_range_ids_have_no_label() {
        let labels = sample_map();
        assert_eq!(labels.get(4, IndexOrigin::ZeroBased), None);
        assert_eq!(labels.get(-3, IndexOrigin::ZeroBased), None);
        assert_eq!(labels.get(5, IndexOrigin::OneBased), None);
    }

    #[test]
    fn malformed_lines_report_their_number() {
        let text = "0: 'tench',\nnot a label line\n";
        let err = LabelMap::from_reader(Cursor::new(text.as_bytes()), &PathBuf::from("bad.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::LabelParse { line: 2, .. }));
    }

    #[test]
    fn out_of_order_ids_are_rejected() {
        let text = "0: 'tench',\n2: 'goldfish',\n";
        let err = LabelMap::from_reader(Cursor::new(text.as_bytes()), &PathBuf::from("gap.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::LabelParse { line: 2, .. }));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let labels = LabelMap::from_file(file.path()).unwrap();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn missing_file_is_a_source_read_error() {
        let err = LabelMap::from_file(&PathBuf::from("no/such/labels.txt")).unwrap_err();
        assert!(matches!(err, Error::SourceRead { .. }));
    }
}
