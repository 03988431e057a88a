use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::OnceCell;
use thiserror::Error;

use super::model::{
    Dataset, JOURNAL_COLUMN, MetadataValue, PUBLISH_TIME_COLUMN, PUBLISH_YEAR_COLUMN,
    PaperRecord, TITLE_COLUMN, is_na,
};

/// Reasons the metadata file could not be turned into a [`Dataset`].
/// All of them are fatal: the explorer never renders a partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalize the metadata CSV at `path`.
///
/// * `publish_time` is parsed leniently; anything unparsable becomes null.
/// * `publish_year` is derived from `publish_time`.
/// * Missing `journal` cells (any pandas NA token) become `"Unknown"`.
/// * Every other column is kept with an inferred type.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(reader)
}

/// Same as [`load_csv`] but from any reader; used for in-memory input.
pub fn read_dataset<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Row { row: 0, source })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let time_idx = headers
        .iter()
        .position(|h| h == PUBLISH_TIME_COLUMN)
        .ok_or(LoadError::MissingColumn(PUBLISH_TIME_COLUMN))?;
    let journal_idx = headers
        .iter()
        .position(|h| h == JOURNAL_COLUMN)
        .ok_or(LoadError::MissingColumn(JOURNAL_COLUMN))?;

    let mut records = Vec::new();
    let mut unparsed_dates = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Row {
            row: row_no + 1,
            source,
        })?;

        let raw_time = record.get(time_idx).unwrap_or("");
        let publish_time = parse_publish_time(raw_time);
        if publish_time.is_none() && !is_na(raw_time.trim()) {
            unparsed_dates += 1;
        }

        let journal = record
            .get(journal_idx)
            .filter(|j| !is_na(j))
            .map(String::from);

        let mut metadata = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == time_idx || col_idx == journal_idx {
                continue;
            }
            let col_name = &headers[col_idx];
            // A stale derived column in the input is recomputed, not trusted.
            if col_name == PUBLISH_YEAR_COLUMN {
                continue;
            }
            let value = if col_name == TITLE_COLUMN {
                MetadataValue::text(value)
            } else {
                MetadataValue::infer(value)
            };
            metadata.insert(col_name.clone(), value);
        }

        records.push(PaperRecord::new(journal, publish_time, metadata));
    }

    if unparsed_dates > 0 {
        log::debug!("{unparsed_dates} publish_time values could not be parsed and were set to null");
    }

    let dataset = Dataset::from_records(headers, records);
    log::info!(
        "Loaded {} papers from {} journals, years {:?}",
        dataset.len(),
        dataset.journals().len(),
        dataset.year_bounds().map(|r| (r.min(), r.max()))
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Memoized handle
// ---------------------------------------------------------------------------

/// A once-loaded dataset handle. The first successful [`get_or_load`] reads
/// the file; every later call returns the same `Arc` without touching disk.
///
/// [`get_or_load`]: DatasetCache::get_or_load
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceCell<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_or_load(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cell
            .get_or_try_init(|| {
                log::info!("Reading {}", self.path.display());
                load_csv(&self.path).map(Arc::new)
            })
            .cloned()
    }
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y %b %d",
];

/// Datetimes carrying a numeric UTC offset; the date is taken in that offset.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a `publish_time` cell. Never fails: unrecognized input is `None`.
pub fn parse_publish_time(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if is_na(s) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.date_naive());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let without_zone = s.strip_suffix('Z').unwrap_or(s);
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(without_zone, fmt) {
            return Some(dt.date());
        }
    }

    // Partial dates: "YYYY-MM" and bare "YYYY".
    if let Some((y, m)) = s.split_once('-') {
        if y.len() == 4 && (1..=2).contains(&m.len()) {
            let year = y.parse().ok()?;
            let month = m.parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, 1);
        }
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1);
    }

    None
}
