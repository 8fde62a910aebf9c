use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{RestaurantRecord, RestaurantSet};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a load attempt failed.
///
/// Both variants are fatal for the attempt: no retry, no partial result.
/// Distance/review parse anomalies are not load errors; they are resolved at
/// filter time (see [`super::filter`]).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The backing source could not be opened.
    #[error("cannot read source {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source was readable but is not a well-formed restaurant table.
    #[error("malformed source: {0}")]
    MalformedSource(String),
}

// ---------------------------------------------------------------------------
// RecordSource – the loading capability
// ---------------------------------------------------------------------------

/// Capability to produce an ordered [`RestaurantSet`] from some backing
/// source.
///
/// The local CSV file is the only source shipped today; a remote spreadsheet
/// or similar would be a second implementation, selected explicitly by the
/// caller.
pub trait RecordSource {
    fn load(&self) -> Result<RestaurantSet, LoadError>;
}

/// Column names the header row must contain (extra columns are ignored).
const REQUIRED_COLUMNS: [&str; 9] = [
    "name", "logo_url", "website", "deals", "menu_url", "reviews", "location", "distance",
    "maps_url",
];

/// Local CSV file source.
///
/// The path is per-session configuration supplied by the caller; nothing
/// here is process-global.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }
}

impl RecordSource for CsvSource {
    fn load(&self) -> Result<RestaurantSet, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::SourceNotFound {
            path: self.path.clone(),
            source,
        })?;
        read_records(file)
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a restaurant listing from a file.  Dispatch by extension.
///
/// Only `.csv` is supported; anything else is rejected before touching the
/// filesystem.
pub fn load_file(path: &Path) -> Result<RestaurantSet, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => CsvSource::new(path).load(),
        other => Err(LoadError::MalformedSource(format!(
            "unsupported file extension: .{other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text into a [`RestaurantSet`].
///
/// The header row must contain every column in `REQUIRED_COLUMNS`; data rows
/// may leave any column except `name` empty.
pub(crate) fn read_records<R: Read>(input: R) -> Result<RestaurantSet, LoadError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::MalformedSource(format!("unreadable header row: {e}")))?;
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MalformedSource(format!(
                "header is missing column '{col}'"
            )));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RestaurantRecord>().enumerate() {
        let record =
            result.map_err(|e| LoadError::MalformedSource(format!("row {row_no}: {e}")))?;
        if record.name.trim().is_empty() {
            return Err(LoadError::MalformedSource(format!(
                "row {row_no}: empty restaurant name"
            )));
        }
        records.push(record);
    }

    log::debug!("loaded {} restaurant rows", records.len());
    Ok(RestaurantSet::from_records(records))
}
